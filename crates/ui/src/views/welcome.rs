use dioxus::prelude::*;

use checklist_core::model::SessionState;

use crate::context::AppContext;
use crate::vm::markdown_to_html;

const INTRO: &str = "\
### AI Verify Testing Framework for Generative AI - Process Checks
This tool helps you assess and document the responsible AI practices that you have implemented in \
deploying your Generative AI application, and generate a summary report.

### Who should use this tool?
- **AI Application Owners / Developers** looking to demonstrate and document responsible AI governance practices
- **Internal Compliance Teams** looking to ensure responsible AI practices have been implemented
- **External Auditors** looking to validate your clients' implementation of responsible AI practices

### About the Testing Framework Process Checks
The testing framework covers responsible AI practices and measures that are aligned with 11 \
internationally recognised AI governance principles:

1. Transparency
2. Explainability
3. Repeatability / Reproducibility
4. Safety
5. Security
6. Robustness
7. Fairness
8. Data Governance
9. Accountability
10. Human Agency and Oversight
11. Inclusive Growth, Societal and Environmental Well-being

### Technical Testing for Generative AI Applications
In the process checks, references were made to conduct technical tests on the Generative AI \
applications. These can be achieved through the use of technical testing tools such as Project Moonshot.
";

#[component]
pub fn WelcomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<SessionState>>();
    let navigator = ctx.navigator();
    let intro_html = use_hook(|| markdown_to_html(INTRO));

    rsx! {
        section { class: "welcome",
            div { class: "welcome-intro", dangerous_inner_html: "{intro_html}" }
            button {
                class: "btn btn-primary welcome-start",
                r#type: "button",
                onclick: move |_| {
                    navigator.next(&mut session.write());
                },
                "Get Started"
            }
        }
    }
}
