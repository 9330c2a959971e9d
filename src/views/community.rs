// ============================================================================
// COMMUNITY - Voluntariado, foro e historias de recuperación
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{bind, ProgressBar, SearchInput, Tabs, TextAreaField, TextField};
use crate::data::community::{discussions, success_stories, volunteer_opportunities};
use crate::hooks::use_toast;
use crate::models::forms::DiscussionPostForm;
use crate::models::{filter_opportunities, CommunityTab};
use crate::services::simulated_api;
use crate::utils::{format_long_date, initials};

#[function_component(CommunityPage)]
pub fn community_page() -> Html {
    let tab = use_state(|| CommunityTab::Opportunities);

    let tabs: Vec<(CommunityTab, String)> = CommunityTab::all()
        .into_iter()
        .map(|t| (t, t.label().to_string()))
        .collect();
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected| tab.set(selected))
    };

    html! {
        <div class="page community">
            <h1>{"🤝 Community Support"}</h1>
            <p class="muted">{"Connect with volunteers, share experiences, and find support in your community."}</p>

            <Tabs<CommunityTab> {tabs} active={*tab} on_select={on_tab} />

            {
                match *tab {
                    CommunityTab::Opportunities => html! { <Opportunities /> },
                    CommunityTab::Discussions => html! { <Discussions /> },
                    CommunityTab::Success => html! { <SuccessStories /> },
                }
            }
        </div>
    }
}

#[function_component(Opportunities)]
fn opportunities() -> Html {
    let toast = use_toast();
    let all = use_memo((), |_| volunteer_opportunities());
    let query = use_state(String::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let visible = filter_opportunities(&all, &query);

    html! {
        <div class="stack">
            <SearchInput
                value={(*query).clone()}
                placeholder="Search by title, location or organization..."
                on_change={on_search}
            />
            if visible.is_empty() {
                <div class="card empty">
                    <p>{"No volunteer opportunities found matching your search."}</p>
                </div>
            }
            <div class="grid grid-2">
                { for visible.into_iter().map(|opportunity| {
                    let toast = toast.clone();
                    let title = opportunity.title.clone();
                    let on_volunteer = Callback::from(move |_| {
                        toast.notify(
                            "Thank you for volunteering!",
                            &format!("You've signed up for {}. We'll send you the details by email.", title),
                        );
                    });
                    html! {
                        <div key={opportunity.id} class="card">
                            <h3>{ &opportunity.title }</h3>
                            <p class="muted small">{ &opportunity.organization }</p>
                            <p class="small">{ &opportunity.description }</p>
                            <ul class="meta small">
                                <li>{ format!("📍 {}", opportunity.location) }</li>
                                <li>{ format!("📅 {}", format_long_date(&opportunity.date)) }</li>
                                <li>{ format!("🕘 {} - {}", opportunity.start_time, opportunity.end_time) }</li>
                            </ul>
                            <div class="badges">
                                { for opportunity.skills.iter().map(|skill| html! {
                                    <span class="badge outline">{ skill }</span>
                                }) }
                            </div>
                            <div class="row-between small">
                                <span>{ format!("{} / {} volunteers", opportunity.volunteers_signed_up, opportunity.volunteers_needed) }</span>
                                <span class="muted">{ format!("{} spots left", opportunity.spots_remaining()) }</span>
                            </div>
                            <ProgressBar percent={opportunity.signup_progress()} />
                            <button type="button" class="btn btn-primary full" onclick={on_volunteer}>
                                {"Volunteer Now"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(Discussions)]
fn discussions_panel() -> Html {
    let toast = use_toast();
    let posts = use_memo((), |_| discussions());
    let form = use_state(DiscussionPostForm::default);
    let posting = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let posting = posting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                toast.error("Error", &err);
                return;
            }
            posting.set(true);
            let form = form.clone();
            let posting = posting.clone();
            let toast = toast.clone();
            spawn_local(async move {
                simulated_api::submit_form("publicación").await;
                toast.notify("Post submitted!", "Your post will appear after review.");
                form.set(DiscussionPostForm::default());
                posting.set(false);
            });
        })
    };

    html! {
        <div class="layout-split">
            <div class="stack">
                { for posts.iter().map(|post| html! {
                    <div key={post.id} class="card">
                        <div class="row">
                            <div class="avatar">{ initials(&post.author) }</div>
                            <div>
                                <strong>{ &post.author }</strong>
                                <p class="muted small">{ format!("{} · {}", post.author_role, format_long_date(&post.date)) }</p>
                            </div>
                        </div>
                        <h3>{ &post.title }</h3>
                        <p class="small">{ &post.content }</p>
                        <div class="row small muted">
                            <span>{ format!("💬 {} replies", post.replies) }</span>
                            <span>{ format!("👍 {} likes", post.likes) }</span>
                        </div>
                    </div>
                }) }
            </div>
            <form class="card" onsubmit={on_submit}>
                <h2>{"Start a Discussion"}</h2>
                <TextField
                    id="post-title"
                    label="Title"
                    value={form.title.clone()}
                    placeholder="What would you like to discuss?"
                    on_input={bind(&form, |f: &mut DiscussionPostForm, v| f.title = v)}
                />
                <TextAreaField
                    id="post-content"
                    label="Message"
                    value={form.content.clone()}
                    placeholder="Share your thoughts, questions, or experiences..."
                    on_input={bind(&form, |f: &mut DiscussionPostForm, v| f.content = v)}
                />
                <button type="submit" class="btn btn-primary full" disabled={*posting}>
                    { if *posting { "Posting..." } else { "Post to Community" } }
                </button>
            </form>
        </div>
    }
}

#[function_component(SuccessStories)]
fn success_stories_panel() -> Html {
    let stories = use_memo((), |_| success_stories());

    html! {
        <div class="grid grid-2">
            { for stories.iter().map(|story| html! {
                <div key={story.id} class="card">
                    <h3>{ &story.title }</h3>
                    <p class="muted small">{ format!("By {} · {}", story.author, format_long_date(&story.date)) }</p>
                    <p class="small">{ &story.content }</p>
                    <p class="small muted">{ format!("❤️ {}", story.likes) }</p>
                </div>
            }) }
        </div>
    }
}
