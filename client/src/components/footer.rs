//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::{Icon, IconKind};
use crate::content::profile::{CONTACT_EMAIL, NAV_LINKS, SITE_NAME, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <A href="/" attr:class="footer__brand">
                        <span class="footer__logo">"D"</span>
                        <span>"Design" <span class="text-primary">"Journal"</span></span>
                    </A>
                    <p class="text-muted">
                        "An interactive portfolio showcasing my design process, experiences, and evolution over time."
                    </p>
                    <div class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <a class="footer__social-link" href=*href target="_blank" rel="noopener noreferrer">
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <h4>"Explore"</h4>
                    <ul class="footer__links">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! { <li><A href=*href>{*label}</A></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Get in Touch"</h4>
                    <p class="text-muted">
                        "Have a question or want to work together on a project? Feel free to reach out!"
                    </p>
                    <a class="footer__mail" href=format!("mailto:{CONTACT_EMAIL}")>
                        <Icon kind=IconKind::Mail size=16/>
                        {CONTACT_EMAIL}
                    </a>
                </div>
            </div>
            <div class="footer__bottom">
                <p class="text-muted">{format!("© 2025 {SITE_NAME}. All rights reserved.")}</p>
            </div>
        </footer>
    }
}
