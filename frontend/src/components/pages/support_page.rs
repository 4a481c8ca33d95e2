use chrono::Utc;
use shared::{
    dates, mock,
    validate::{self, TicketDraft, TicketError},
    SupportTicket, TicketPriority, TicketStatus,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

fn priority_from_value(value: &str) -> Option<TicketPriority> {
    match value {
        "low" => Some(TicketPriority::Low),
        "medium" => Some(TicketPriority::Medium),
        "high" => Some(TicketPriority::High),
        "urgent" => Some(TicketPriority::Urgent),
        _ => None,
    }
}

fn priority_value(priority: TicketPriority) -> &'static str {
    match priority {
        TicketPriority::Low => "low",
        TicketPriority::Medium => "medium",
        TicketPriority::High => "high",
        TicketPriority::Urgent => "urgent",
    }
}

#[function_component(SupportPage)]
pub fn support_page() -> Html {
    let tickets = use_state(mock::tickets);
    let faq = mock::faq_entries();
    let expanded_faq = use_state(|| None::<usize>);

    let subject = use_state(String::new);
    let category = use_state(String::new);
    let priority = use_state(|| None::<TicketPriority>);
    let description = use_state(String::new);
    let form_error = use_state(|| None::<TicketError>);
    let form_success = use_state(|| false);

    let on_subject_change = {
        let subject = subject.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subject.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_priority_change = {
        let priority = priority.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            priority.set(priority_from_value(&select.value()));
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(textarea.value());
        })
    };

    let on_submit = {
        let tickets = tickets.clone();
        let subject = subject.clone();
        let category = category.clone();
        let priority = priority.clone();
        let description = description.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = TicketDraft {
                subject: (*subject).clone(),
                category: (*category).clone(),
                priority: *priority,
                description: (*description).clone(),
            };

            match validate::validate_ticket(&draft) {
                Ok(()) => {
                    let today = Utc::now().date_naive();
                    let ticket = SupportTicket {
                        id: SupportTicket::generate_id(tickets.len() + 1),
                        subject: draft.subject.trim().to_string(),
                        status: TicketStatus::Open,
                        priority: draft.priority.unwrap_or(TicketPriority::Low),
                        category: draft.category,
                        created_date: today,
                        last_updated: today,
                    };

                    let mut updated = (*tickets).clone();
                    updated.insert(0, ticket);
                    tickets.set(updated);

                    subject.set(String::new());
                    category.set(String::new());
                    priority.set(None);
                    description.set(String::new());
                    form_error.set(None);
                    form_success.set(true);

                    let form_success = form_success.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(3000).await;
                        form_success.set(false);
                    });
                }
                Err(error) => form_error.set(Some(error)),
            }
        })
    };

    html! {
        <div class="support-page">
            <header class="page-header">
                <h1>{"Support"}</h1>
            </header>

            <section class="ticket-form-section">
                <h2>{"Submit a Ticket"}</h2>

                {if let Some(error) = form_error.as_ref() {
                    html! { <div class="form-message error">{error.to_string()}</div> }
                } else { html! {} }}
                {if *form_success {
                    html! { <div class="form-message success">{"Ticket submitted"}</div> }
                } else { html! {} }}

                <form class="ticket-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="subject">{"Subject"}</label>
                        <input
                            type="text"
                            id="subject"
                            placeholder="Brief summary of the issue"
                            value={(*subject).clone()}
                            onchange={on_subject_change}
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="category">{"Category"}</label>
                            <select id="category" onchange={on_category_change}>
                                <option value="" selected={category.is_empty()}>
                                    {"Select a category"}
                                </option>
                                {for SupportTicket::CATEGORIES.iter().map(|name| {
                                    html! {
                                        <option value={*name} selected={*category == *name}>
                                            {*name}
                                        </option>
                                    }
                                })}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="priority">{"Priority"}</label>
                            <select id="priority" onchange={on_priority_change}>
                                <option value="" selected={priority.is_none()}>
                                    {"Select a priority"}
                                </option>
                                {for TicketPriority::ALL.iter().map(|level| {
                                    html! {
                                        <option
                                            value={priority_value(*level)}
                                            selected={*priority == Some(*level)}
                                        >
                                            {level.label()}
                                        </option>
                                    }
                                })}
                            </select>
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="description">{"Description"}</label>
                        <textarea
                            id="description"
                            rows="4"
                            placeholder="Describe the issue in detail"
                            value={(*description).clone()}
                            onchange={on_description_change}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">{"Submit Ticket"}</button>
                </form>
            </section>

            <section class="tickets-section">
                <h2>{"Your Tickets"}</h2>
                <table class="tickets-table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Subject"}</th>
                            <th>{"Category"}</th>
                            <th>{"Priority"}</th>
                            <th>{"Status"}</th>
                            <th>{"Created"}</th>
                            <th>{"Updated"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for tickets.iter().map(|ticket| {
                            html! {
                                <tr key={ticket.id.clone()}>
                                    <td>{&ticket.id}</td>
                                    <td>{&ticket.subject}</td>
                                    <td>{&ticket.category}</td>
                                    <td>
                                        <span class={ticket.priority.badge().css_class()}>
                                            {ticket.priority.label()}
                                        </span>
                                    </td>
                                    <td>
                                        <span class={ticket.status.badge().css_class()}>
                                            {ticket.status.label()}
                                        </span>
                                    </td>
                                    <td>{dates::format_short_date(ticket.created_date)}</td>
                                    <td>{dates::format_short_date(ticket.last_updated)}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </section>

            <section class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                <ul class="faq-list">
                    {for faq.iter().enumerate().map(|(index, entry)| {
                        let expanded = *expanded_faq == Some(index);
                        let toggle = {
                            let expanded_faq = expanded_faq.clone();
                            Callback::from(move |_| {
                                expanded_faq.set(if expanded { None } else { Some(index) });
                            })
                        };
                        html! {
                            <li class="faq-entry">
                                <button class="faq-question" onclick={toggle}>
                                    {&entry.question}
                                    <span>{if expanded { "−" } else { "+" }}</span>
                                </button>
                                {if expanded {
                                    html! { <p class="faq-answer">{&entry.answer}</p> }
                                } else { html! {} }}
                            </li>
                        }
                    })}
                </ul>
            </section>
        </div>
    }
}
