use dioxus::prelude::*;

use checklist_core::model::{
    AppInfoDraft, MAX_APP_DESCRIPTION_CHARS, MAX_APP_NAME_CHARS, SessionState,
};

use crate::context::AppContext;
use crate::vm::plain_text;

#[component]
pub fn GetStartedView() -> Element {
    let ctx = use_context::<AppContext>();
    let checklist = ctx.checklist();
    let mut session = use_context::<Signal<SessionState>>();

    let mut name = use_signal(|| session.peek().app_info().name().to_owned());
    let mut description = use_signal(|| session.peek().app_info().description().to_owned());
    let mut error = use_signal(|| None::<String>);

    let (saved, editing) = {
        let state = session.read();
        (state.app_info().clone(), state.edit_mode())
    };
    let show_form = editing || saved.is_empty();

    let on_save = use_callback(move |()| {
        let draft = AppInfoDraft::new(plain_text(&name.peek()), plain_text(&description.peek()));
        match checklist.update_app_info(&mut session.write(), draft) {
            Ok(()) => error.set(None),
            Err(err) => error.set(Some(err.to_string())),
        }
    });

    rsx! {
        section { class: "get-started",
            h2 { "Get Started" }
            p { "Tell us about the Generative AI application you are assessing." }

            if show_form {
                form {
                    class: "app-info-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_save.call(());
                    },
                    label { r#for: "app-name", "Application name" }
                    input {
                        id: "app-name",
                        r#type: "text",
                        maxlength: "{MAX_APP_NAME_CHARS}",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label { r#for: "app-description", "Application description" }
                    textarea {
                        id: "app-description",
                        maxlength: "{MAX_APP_DESCRIPTION_CHARS}",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                    if let Some(message) = error() {
                        p { class: "form-error", "{message}" }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                }
            } else {
                dl { class: "app-info",
                    dt { "Application name" }
                    dd { "{saved.name()}" }
                    dt { "Application description" }
                    dd { "{saved.description()}" }
                }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| session.write().set_edit_mode(true),
                    "Edit"
                }
            }
        }
    }
}
