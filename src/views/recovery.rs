// ============================================================================
// RECOVERY - Directorio de recursos tras el desastre
// ============================================================================

use yew::prelude::*;

use crate::components::{Accordion, Tabs};
use crate::data::recovery::{recovery_faqs, resources};
use crate::models::{resources_in, ResourceCategory};

/// Tarjetas de resumen: (categoría destino, título, subtítulo, texto)
const OVERVIEW: [(ResourceCategory, &str, &str, &str); 3] = [
    (
        ResourceCategory::Financial,
        "Financial Aid",
        "Disaster assistance grants, loans, and unemployment benefits",
        "Access financial resources to help with recovery expenses, rebuilding costs, and income replacement.",
    ),
    (
        ResourceCategory::Housing,
        "Housing Support",
        "Temporary shelter, home repairs, and relocation assistance",
        "Find temporary housing solutions and get help rebuilding or repairing your damaged home.",
    ),
    (
        ResourceCategory::Legal,
        "Recovery Support",
        "Legal assistance, mental health services, and more",
        "Get help navigating insurance claims, contracts, mental health services, and other recovery needs.",
    ),
];

const CHECKLIST: [(&str, &str); 7] = [
    ("Document Damage", "Take photos and videos of all damage before cleaning up or making repairs. Make a detailed list of damaged items."),
    ("Contact Insurance", "File claims with your homeowners, flood, or other relevant insurance. Keep records of all conversations with insurance representatives."),
    ("Apply for Assistance", "Register with FEMA at DisasterAssistance.gov or call 1-800-621-3362. Visit a local Disaster Recovery Center if one is available."),
    ("Restore Utilities", "Contact utility companies to restore services or report outages. Have electrical systems inspected before turning power back on if there was flooding."),
    ("Clean and Repair", "Follow safety guidelines for cleanup, wear protective gear. Hire licensed contractors for major repairs and check references."),
    ("Replace Documents", "Replace lost identification, property deeds, medical records, and other important documents."),
    ("Seek Support", "Connect with disaster case managers and community resources. Don't neglect mental health needs during recovery."),
];

#[function_component(RecoveryPage)]
pub fn recovery_page() -> Html {
    let all = use_memo((), |_| resources());
    let faqs = use_memo((), |_| {
        recovery_faqs()
            .into_iter()
            .enumerate()
            .map(|(index, faq)| (format!("item-{}", index), faq))
            .collect::<Vec<_>>()
    });
    let category = use_state(|| ResourceCategory::Financial);

    let select = |target: ResourceCategory| {
        let category = category.clone();
        Callback::from(move |_| category.set(target))
    };
    let on_tab = {
        let category = category.clone();
        Callback::from(move |selected| category.set(selected))
    };

    let tabs: Vec<(ResourceCategory, String)> = ResourceCategory::all()
        .into_iter()
        .map(|c| (c, c.display_name().to_string()))
        .collect();

    html! {
        <div class="page recovery">
            <h1>{"🛡️ Post-Disaster Recovery"}</h1>
            <p class="muted">
                {"Access resources and support to help you recover from disasters. Find assistance with housing, financial aid, legal help, and mental health services during the rebuilding process."}
            </p>

            <div class="grid grid-3">
                { for OVERVIEW.iter().map(|(target, title, subtitle, body)| html! {
                    <div class="card">
                        <span class="card-icon">{ target.icon() }</span>
                        <h3>{ *title }</h3>
                        <p class="muted small">{ *subtitle }</p>
                        <p class="small">{ *body }</p>
                        <button type="button" class="btn btn-outline full" onclick={select(*target)}>
                            {"View Resources"}
                        </button>
                    </div>
                }) }
            </div>

            <Tabs<ResourceCategory> {tabs} active={*category} on_select={on_tab} />

            <section class="stack">
                <h2>{ format!("{} {} Resources", category.icon(), category.display_name()) }</h2>
                { for resources_in(&all, *category).into_iter().map(|resource| html! {
                    <div key={resource.id} class="card">
                        <div class="row-between">
                            <div>
                                <h3>{ &resource.title }</h3>
                                <p class="muted small">{ &resource.organization }</p>
                            </div>
                            <span class="badge outline">{ format!("Deadline: {}", resource.deadline) }</span>
                        </div>
                        <p>{ &resource.description }</p>
                        <div class="grid grid-2 small">
                            <span>{ format!("📞 {}", resource.phone) }</span>
                            <span>{ format!("👥 Eligibility: {}", resource.eligibility) }</span>
                        </div>
                        <div class="row-between">
                            <a class="btn btn-outline" href={format!("tel:{}", resource.phone)}>{"📞 Call"}</a>
                            <button type="button" class="btn btn-primary">{"Apply Online"}</button>
                        </div>
                    </div>
                }) }
            </section>

            <section>
                <h2>{"💼 Recovery Checklist"}</h2>
                <div class="card stack-sm">
                    { for CHECKLIST.iter().map(|(title, body)| html! {
                        <div class="row checklist-row">
                            <span class="check">{"✓"}</span>
                            <div>
                                <h4>{ *title }</h4>
                                <p class="muted small">{ *body }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section>
                <h2>{"💬 Frequently Asked Questions"}</h2>
                <div class="card">
                    <Accordion items={(*faqs).clone()} />
                    <p class="muted small">{"Can't find your answer? Contact our support team for more assistance."}</p>
                </div>
            </section>
        </div>
    }
}
