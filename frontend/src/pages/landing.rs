use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::consent_dialog::{AccessRestricted, CookieConsent};
use crate::components::language_switch::LanguageSwitch;
use crate::components::legal_modal::{LegalDocument, LegalModal};
use crate::components::waitlist_form::WaitlistForm;
use crate::config;
use crate::consent::{ConsentGate, ConsentState, LocalStorageConsent};
use crate::i18n::{Catalog, Language};
use crate::locale::{detect_language, LanguagePreference};
use crate::variant::Variant;

fn consent_gate() -> ConsentGate<LocalStorageConsent> {
    ConsentGate::new(LocalStorageConsent::new(config::CONSENT_STORAGE_KEY))
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub catalog: Catalog,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let catalog = props.catalog;
    let variant_param = use_search_param("variant".to_string());
    let variant = Variant::from_query(variant_param.as_deref());

    let consent = use_state(|| consent_gate().get_consent());
    let language = use_state(Language::default);
    let preference = use_mut_ref(LanguagePreference::default);
    let legal = use_state(|| None::<LegalDocument>);

    {
        let language = language.clone();
        let preference = preference.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let detected = detect_language().await;
                    if preference.borrow_mut().detected(detected) {
                        language.set(detected);
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_accept = {
        let consent = consent.clone();
        Callback::from(move |_: ()| consent.set(consent_gate().accept()))
    };
    let on_reject = {
        let consent = consent.clone();
        Callback::from(move |_: ()| consent.set(consent_gate().reject()))
    };
    let on_language = {
        let language = language.clone();
        let preference = preference.clone();
        Callback::from(move |selected: Language| {
            preference.borrow_mut().choose(selected);
            language.set(selected);
        })
    };
    let close_legal = {
        let legal = legal.clone();
        Callback::from(move |_: ()| legal.set(None))
    };

    let t = catalog.get(*language);

    if *consent == ConsentState::Rejected {
        return html! {
            <div class={classes!("landing", variant.theme_class())}>
                <style>{STYLES}</style>
                <AccessRestricted {t} on_accept={on_accept} />
            </div>
        };
    }

    let legal_links = LegalDocument::ALL.iter().map(|document| {
        let document = *document;
        let onclick = {
            let legal = legal.clone();
            Callback::from(move |_: MouseEvent| legal.set(Some(document)))
        };
        html! {
            <button class="footer-link" {onclick}>{document.title(t)}</button>
        }
    });

    html! {
        <div class={classes!("landing", variant.theme_class())}>
            <style>{STYLES}</style>
            if *consent == ConsentState::Undecided {
                <CookieConsent {t} on_accept={on_accept.clone()} on_reject={on_reject} />
            }

            <div class="banner">
                {for (0..4).map(|_| html! { <span class="banner-item">{format!("• {}", t.coming_soon)}</span> })}
            </div>

            <nav class="top-nav">
                <span class="nav-logo">{"PLURAVITA"}</span>
                <LanguageSwitch current={*language} on_select={on_language} />
            </nav>

            <main class="hero">
                <h1>
                    {t.title1}
                    <br />
                    <span class="accent">{t.title2}</span>
                </h1>
                <p class="subtitle">
                    {t.subtitle}
                    <span class="price-tag">{t.price_tag}</span>
                </p>

                <div class="form-slot">
                    if ConsentGate::<LocalStorageConsent>::allows_form(*consent) {
                        <WaitlistForm
                            language={*language}
                            consent={*consent}
                            {catalog}
                            {variant}
                        />
                    }
                    <p class="brand-name">{t.brand_name}</p>
                </div>
            </main>

            <footer class="footer">
                <p>{format!("© {} Pluravita. {}", chrono::Utc::now().year(), t.footer_rights)}</p>
                <div class="footer-links">
                    { for legal_links }
                </div>
            </footer>

            if let Some(document) = *legal {
                <LegalModal {document} {t} on_close={close_legal} />
            }
        </div>
    }
}

const STYLES: &str = r#"
.landing {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    font-family: system-ui, sans-serif;
    background: #fafaf9;
    color: #1c1917;
}
.theme-teal { --accent: #0f766e; --accent-dark: #115e59; --banner: #134e4a; }
.theme-sand { --accent: #b45309; --accent-dark: #92400e; --banner: #78350f; }
.banner {
    background: var(--banner);
    color: #f0fdfa;
    padding: 0.75rem 0;
    overflow: hidden;
    white-space: nowrap;
}
.banner-item {
    margin: 0 2rem;
    font-size: 0.85rem;
    font-weight: 700;
    letter-spacing: 0.2em;
    text-transform: uppercase;
}
.top-nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.5rem 2rem;
}
.nav-logo {
    font-family: Georgia, serif;
    font-weight: 700;
    letter-spacing: 0.2em;
    color: var(--accent-dark);
}
.language-switch {
    display: flex;
    gap: 0.4rem;
    align-items: center;
    font-size: 0.75rem;
    color: #a8a29e;
}
.language-option { background: none; border: none; cursor: pointer; color: inherit; }
.language-option.active { color: var(--accent); font-weight: 700; }
.hero {
    flex-grow: 1;
    text-align: center;
    padding: 3rem 1rem;
}
.hero h1 { font-family: Georgia, serif; font-size: 2.75rem; line-height: 1.2; }
.hero .accent { color: var(--accent); }
.subtitle { max-width: 40rem; margin: 1.5rem auto 2.5rem; color: #57534e; }
.price-tag { display: block; margin-top: 0.5rem; font-weight: 600; color: var(--accent-dark); }
.form-slot { max-width: 28rem; margin: 0 auto; }
.waitlist-form { display: flex; flex-direction: column; gap: 0.75rem; }
.waitlist-form input {
    padding: 1rem;
    border-radius: 0.75rem;
    border: 1px solid #e7e5e4;
}
.notice {
    font-size: 0.7rem;
    text-align: left;
    color: #78716c;
    background: #f5f5f4;
    padding: 1rem;
    border-radius: 0.75rem;
}
.error-message { color: #be123c; font-size: 0.85rem; }
.primary-button {
    padding: 1rem;
    border: none;
    border-radius: 0.75rem;
    background: var(--accent, #0f766e);
    color: white;
    font-weight: 700;
    cursor: pointer;
}
.primary-button:disabled { opacity: 0.7; }
.secondary-button {
    padding: 0.75rem;
    border: 1px solid #e7e5e4;
    border-radius: 0.5rem;
    background: white;
    color: #a8a29e;
    cursor: pointer;
}
.link-button {
    margin-top: 1.5rem;
    background: none;
    border: none;
    text-decoration: underline;
    color: var(--accent);
    cursor: pointer;
}
.success-card {
    text-align: left;
    padding: 2rem;
    border-radius: 1rem;
    background: #f0fdfa;
    border: 1px solid #ccfbf1;
}
.success-title { display: flex; gap: 0.75rem; font-weight: 600; margin-bottom: 1rem; }
.welcome-message { font-style: italic; font-size: 0.9rem; }
.brand-name {
    margin-top: 1.5rem;
    font-size: 0.7rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: #a8a29e;
}
.loading-spinner {
    display: inline-block;
    width: 20px;
    height: 20px;
    border: 3px solid rgba(255,255,255,.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin 1s ease-in-out infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.consent-overlay, .legal-overlay {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(28, 25, 23, 0.95);
}
.legal-overlay { background: rgba(28, 25, 23, 0.6); }
.consent-card, .legal-card, .restricted-card {
    max-width: 28rem;
    width: 100%;
    background: white;
    border-radius: 1rem;
    padding: 2rem;
    text-align: center;
}
.consent-actions { display: flex; flex-direction: column; gap: 0.75rem; }
.consent-icon, .restricted-icon { font-size: 3rem; }
.restricted-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
}
.footer {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 1.5rem;
    padding: 3rem 2rem;
    border-top: 1px solid #e7e5e4;
    color: #78716c;
    font-size: 0.85rem;
}
.footer-links { display: flex; gap: 2rem; }
.footer-link { background: none; border: none; cursor: pointer; color: inherit; }
.footer-link:hover { color: var(--accent); }
@media (max-width: 768px) {
    .hero h1 { font-size: 2.25rem; }
    .footer { flex-direction: column; align-items: center; }
}
"#;
