use yew::prelude::*;

use crate::i18n::Translations;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDocument {
    Legal,
    Privacy,
    Cookies,
}

impl LegalDocument {
    pub const ALL: [LegalDocument; 3] = [
        LegalDocument::Legal,
        LegalDocument::Privacy,
        LegalDocument::Cookies,
    ];

    pub fn title(self, t: &Translations) -> &'static str {
        match self {
            LegalDocument::Legal => t.legal_notice,
            LegalDocument::Privacy => t.privacy_policy,
            LegalDocument::Cookies => t.cookies_policy,
        }
    }

    pub fn body(self, t: &Translations) -> &'static str {
        match self {
            LegalDocument::Legal => t.legal_body,
            LegalDocument::Privacy => t.privacy_body,
            LegalDocument::Cookies => t.cookies_body,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalModalProps {
    pub document: LegalDocument,
    pub t: &'static Translations,
    pub on_close: Callback<()>,
}

#[function_component(LegalModal)]
pub fn legal_modal(props: &LegalModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="legal-overlay" role="dialog" aria-modal="true">
            <div class="legal-card">
                <h2>{props.document.title(props.t)}</h2>
                <p>{props.document.body(props.t)}</p>
                <button class="secondary-button" onclick={close}>
                    {props.t.close}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Language};

    #[test]
    fn every_document_has_copy_in_every_language() {
        let catalog = Catalog::builtin();
        for language in Language::ALL {
            let t = catalog.get(language);
            for document in LegalDocument::ALL {
                assert!(!document.title(t).is_empty());
                assert!(!document.body(t).is_empty());
            }
        }
    }
}
