use yew::prelude::*;

use crate::i18n::Translations;

#[derive(Properties, PartialEq)]
pub struct CookieConsentProps {
    pub t: &'static Translations,
    pub on_accept: Callback<()>,
    pub on_reject: Callback<()>,
}

#[function_component(CookieConsent)]
pub fn cookie_consent(props: &CookieConsentProps) -> Html {
    let accept = {
        let on_accept = props.on_accept.clone();
        Callback::from(move |_: MouseEvent| on_accept.emit(()))
    };
    let reject = {
        let on_reject = props.on_reject.clone();
        Callback::from(move |_: MouseEvent| on_reject.emit(()))
    };

    html! {
        <div class="consent-overlay" role="dialog" aria-modal="true">
            <div class="consent-card">
                <span class="consent-icon">{"🍪"}</span>
                <h2>{props.t.cookie_title}</h2>
                <p>{props.t.cookie_desc}</p>
                <div class="consent-actions">
                    <button class="primary-button" onclick={accept}>
                        {props.t.cookie_accept}
                    </button>
                    <button class="secondary-button" onclick={reject}>
                        {props.t.cookie_reject}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccessRestrictedProps {
    pub t: &'static Translations,
    pub on_accept: Callback<()>,
}

/// Shown instead of the whole page once cookies were rejected.
#[function_component(AccessRestricted)]
pub fn access_restricted(props: &AccessRestrictedProps) -> Html {
    let accept = {
        let on_accept = props.on_accept.clone();
        Callback::from(move |_: MouseEvent| on_accept.emit(()))
    };

    html! {
        <div class="restricted-page">
            <div class="restricted-card">
                <span class="restricted-icon">{"⛔"}</span>
                <h1>{props.t.restricted_title}</h1>
                <p>{props.t.restricted_desc}</p>
                <button class="primary-button" onclick={accept}>
                    {props.t.restricted_action}
                </button>
            </div>
        </div>
    }
}
