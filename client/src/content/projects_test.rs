use std::collections::HashSet;

use super::*;

#[test]
fn catalog_has_six_projects_with_unique_ids() {
    let ids: HashSet<_> = all().iter().map(|p| p.id).collect();
    assert_eq!(all().len(), 6);
    assert_eq!(ids.len(), 6);
}

#[test]
fn three_projects_carry_detail() {
    assert_eq!(all().iter().filter(|p| p.detail.is_some()).count(), 3);
}

#[test]
fn featured_is_first_three() {
    let ids: Vec<_> = featured().iter().map(|p| p.id).collect();
    assert_eq!(ids, ["interactive-dashboard", "mobile-app-redesign", "brand-identity"]);
}

#[test]
fn find_by_id() {
    assert_eq!(find("brand-identity").map(|p| p.title), Some("Brand Identity System"));
    assert!(find("does-not-exist").is_none());
}

#[test]
fn default_image_prefers_gallery_then_cover() {
    let detailed = find("interactive-dashboard").expect("project");
    assert_eq!(detailed.default_image(), detailed.gallery()[0]);
    let plain = find("mobile-ui-kit").expect("project");
    assert!(plain.gallery().is_empty());
    assert_eq!(plain.default_image(), plain.image_url);
}
