use yew::prelude::*;

use crate::i18n::Language;

#[derive(Properties, PartialEq)]
pub struct LanguageSwitchProps {
    pub current: Language,
    pub on_select: Callback<Language>,
}

#[function_component(LanguageSwitch)]
pub fn language_switch(props: &LanguageSwitchProps) -> Html {
    let buttons = Language::ALL.iter().enumerate().map(|(i, language)| {
        let language = *language;
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(language))
        };
        html! {
            <>
                if i > 0 {
                    <span class="language-separator">{"/"}</span>
                }
                <button
                    class={classes!("language-option", (props.current == language).then(|| "active"))}
                    {onclick}
                >
                    {language.code().to_uppercase()}
                </button>
            </>
        }
    });

    html! {
        <div class="language-switch">
            <span class="language-globe">{"🌐"}</span>
            { for buttons }
        </div>
    }
}
