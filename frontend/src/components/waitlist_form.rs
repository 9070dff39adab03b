use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::consent::ConsentState;
use crate::i18n::{Catalog, Language};
use crate::variant::Variant;
use crate::waitlist::services::{BackendWelcome, FormspreeIntake};
use crate::waitlist::{Effect, FlowEvent, SubmissionStatus, WaitlistController};

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    pub language: Language,
    pub consent: ConsentState,
    pub catalog: Catalog,
    #[prop_or_default]
    pub variant: Variant,
}

pub enum WaitlistMsg {
    SetName(String),
    SetEmail(String),
    Submit,
    Flow(FlowEvent),
    Reset,
}

pub struct WaitlistForm {
    name: String,
    email: String,
    controller: WaitlistController,
}

impl WaitlistForm {
    fn run(ctx: &Context<Self>, effect: Effect) {
        match effect {
            Effect::Spawn(future) => {
                ctx.link().send_future(async move { WaitlistMsg::Flow(future.await) });
            }
            Effect::After(delay, event) => {
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                ctx.link().send_future(async move {
                    TimeoutFuture::new(millis).await;
                    WaitlistMsg::Flow(event)
                });
            }
        }
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        let t = ctx.props().catalog.get(ctx.props().language);
        let message = self.controller.message().unwrap_or(t.default_welcome);

        html! {
            <div class="success-card">
                <div class="success-title">
                    <span>{"✨"}</span>
                    <span>{t.success_title}</span>
                </div>
                <p class="welcome-message">{format!("\"{}\"", message)}</p>
                <button
                    class="link-button"
                    onclick={ctx.link().callback(|_| WaitlistMsg::Reset)}
                >
                    {t.register_another}
                </button>
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let t = ctx.props().catalog.get(ctx.props().language);
        let status = self.controller.status();
        let loading = status == SubmissionStatus::Loading;

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            WaitlistMsg::Submit
        });

        html! {
            <form class="waitlist-form" {onsubmit}>
                <input
                    type="text"
                    placeholder={t.name_placeholder}
                    value={self.name.clone()}
                    required=true
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        WaitlistMsg::SetName(input.value())
                    })}
                />
                <input
                    type="email"
                    placeholder={t.email_placeholder}
                    value={self.email.clone()}
                    required=true
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        WaitlistMsg::SetEmail(input.value())
                    })}
                />
                <div class="notice">
                    <strong>{t.notice_label}</strong>{format!(" {}", t.notice)}
                </div>
                if status == SubmissionStatus::Error {
                    <div class="error-message" role="alert">{t.error_message}</div>
                }
                <button type="submit" class="primary-button" disabled={loading}>
                    if loading {
                        <span class="loading-spinner"></span>
                    } else {
                        <>{t.button}{" →"}</>
                    }
                </button>
            </form>
        }
    }
}

impl Component for WaitlistForm {
    type Message = WaitlistMsg;
    type Properties = WaitlistFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            name: String::new(),
            email: String::new(),
            controller: WaitlistController::new(
                props.catalog,
                props.variant,
                Rc::new(FormspreeIntake::default()),
                Rc::new(BackendWelcome::default()),
            ),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        self.controller.set_variant(props.variant);
        self.controller.set_catalog(props.catalog);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WaitlistMsg::SetName(name) => {
                self.name = name;
                true
            }
            WaitlistMsg::SetEmail(email) => {
                self.email = email;
                true
            }
            WaitlistMsg::Submit => {
                let props = ctx.props();
                match self
                    .controller
                    .submit(&self.name, &self.email, props.language, props.consent)
                {
                    Ok(request) => {
                        Self::run(ctx, Effect::Spawn(request));
                    }
                    Err(e) => log::debug!("Submission blocked: {}", e),
                }
                true
            }
            WaitlistMsg::Flow(event) => {
                if let Some(effect) = self.controller.handle(event) {
                    Self::run(ctx, effect);
                }
                true
            }
            WaitlistMsg::Reset => {
                self.controller.reset();
                self.name.clear();
                self.email.clear();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.controller.status() == SubmissionStatus::Success {
            self.view_success(ctx)
        } else {
            self.view_form(ctx)
        }
    }
}
