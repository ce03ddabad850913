// SPDX-License-Identifier: MPL-2.0
//! Contact form.
//!
//! Required fields are checked on submit only: blank ones (after trimming)
//! are flagged and the parent shows an error toast. A valid submit puts the
//! button in its sending state; the parent waits out the simulated delay and
//! answers with [`Message::SubmissionFinished`], which restores the button
//! and clears the form.

use super::{frame, header};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::page::Section;
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};
use std::collections::BTreeSet;

/// Form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Phone)
    }

    fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Phone => "contact-phone",
            Field::Message => "contact-message",
        }
    }
}

/// Identifies one submission, so a late completion cannot finish another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

/// Form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    name: String,
    email: String,
    phone: String,
    message: String,
    invalid: BTreeSet<Field>,
    sending: Option<SubmissionId>,
    submissions: u64,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending.is_some()
    }

    /// Re-flags the blank required fields. Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.invalid = Field::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.value(*field).trim().is_empty())
            .collect();
        self.invalid.is_empty()
    }

    /// Clears every field and flag.
    pub fn reset(&mut self) {
        let submissions = self.submissions;
        *self = Self {
            submissions,
            ..Self::default()
        };
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    FieldChanged(Field, String),
    Submit,
    SubmissionFinished(SubmissionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Some required fields are blank.
    ValidationFailed,
    /// The form is sending; answer with `SubmissionFinished(id)` once done.
    SubmissionStarted(SubmissionId),
    /// The submission went through and the form was cleared.
    SubmissionCompleted,
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            *state.value_mut(field) = value;
            Event::None
        }
        Message::Submit => {
            if state.is_sending() {
                return Event::None;
            }
            if !state.validate() {
                tracing::debug!(invalid = ?state.invalid, "contact form rejected");
                return Event::ValidationFailed;
            }
            state.submissions += 1;
            let id = SubmissionId(state.submissions);
            state.sending = Some(id);
            Event::SubmissionStarted(id)
        }
        Message::SubmissionFinished(id) => {
            if state.sending != Some(id) {
                return Event::None;
            }
            state.reset();
            tracing::info!("contact form submitted");
            Event::SubmissionCompleted
        }
    }
}

/// Render the contact section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let fields = Field::ALL.into_iter().fold(
        Column::new().spacing(spacing::MD),
        |column, field| column.push(build_field(&ctx, field)),
    );

    let submit_label = if ctx.state.is_sending() {
        ctx.i18n.tr("contact-sending")
    } else {
        ctx.i18n.tr("contact-submit")
    };
    let submit = button(
        Text::new(submit_label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .on_press_maybe((!ctx.state.is_sending()).then_some(Message::Submit));

    let form = Column::new().spacing(spacing::LG).push(fields).push(submit);

    let content = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(header(
            ctx.i18n.tr("contact-title"),
            Some(ctx.i18n.tr("contact-subtitle")),
        ))
        .push(Container::new(form).max_width(sizing::FORM_MAX_WIDTH));

    frame(Section::Contact, content, styles::container::section)
}

fn build_field<'a>(ctx: &ViewContext<'a>, field: Field) -> Element<'a, Message> {
    let label = ctx.i18n.tr(field.label_key());
    let invalid = ctx.state.is_invalid(field);

    let input = text_input(&label, ctx.state.value(field))
        .on_input(move |value| Message::FieldChanged(field, value))
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::field(invalid));

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(input);

    if invalid {
        column = column.push(
            Text::new(ctx.i18n.tr("contact-field-required"))
                .size(typography::CAPTION)
                .style(styles::text_color(palette::ERROR_500)),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut State, field: Field, value: &str) {
        update(state, Message::FieldChanged(field, value.to_string()));
    }

    fn filled() -> State {
        let mut state = State::new();
        fill(&mut state, Field::Name, "Sara");
        fill(&mut state, Field::Email, "sara@example.com");
        fill(&mut state, Field::Message, "Twelve trucks");
        state
    }

    #[test]
    fn blank_required_fields_are_flagged_on_submit() {
        let mut state = State::new();
        fill(&mut state, Field::Name, "   ");
        fill(&mut state, Field::Email, "a@b.c");

        assert!(!state.is_invalid(Field::Name));
        assert_eq!(update(&mut state, Message::Submit), Event::ValidationFailed);
        assert!(state.is_invalid(Field::Name));
        assert!(!state.is_invalid(Field::Email));
        assert!(state.is_invalid(Field::Message));
        assert!(!state.is_invalid(Field::Phone));
        assert!(!state.is_sending());
    }

    #[test]
    fn flags_are_recomputed_only_on_submit() {
        let mut state = State::new();
        update(&mut state, Message::Submit);
        fill(&mut state, Field::Name, "Sara");
        assert!(state.is_invalid(Field::Name));

        update(&mut state, Message::Submit);
        assert!(!state.is_invalid(Field::Name));
    }

    #[test]
    fn valid_submit_enters_sending_state() {
        let mut state = filled();
        let event = update(&mut state, Message::Submit);
        assert!(matches!(event, Event::SubmissionStarted(_)));
        assert!(state.is_sending());

        // A second submit while sending is ignored.
        assert_eq!(update(&mut state, Message::Submit), Event::None);
    }

    #[test]
    fn completion_resets_the_form() {
        let mut state = filled();
        fill(&mut state, Field::Phone, "+20 100");
        let Event::SubmissionStarted(id) = update(&mut state, Message::Submit) else {
            panic!("expected submission to start");
        };

        assert_eq!(
            update(&mut state, Message::SubmissionFinished(id)),
            Event::SubmissionCompleted
        );
        assert!(!state.is_sending());
        assert!(Field::ALL.iter().all(|field| state.value(*field).is_empty()));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = filled();
        let Event::SubmissionStarted(first) = update(&mut state, Message::Submit) else {
            panic!("expected submission to start");
        };
        update(&mut state, Message::SubmissionFinished(first));

        fill(&mut state, Field::Name, "Omar");
        fill(&mut state, Field::Email, "omar@example.com");
        fill(&mut state, Field::Message, "Two vans");
        let Event::SubmissionStarted(second) = update(&mut state, Message::Submit) else {
            panic!("expected submission to start");
        };
        assert_ne!(first, second);

        assert_eq!(
            update(&mut state, Message::SubmissionFinished(first)),
            Event::None
        );
        assert!(state.is_sending());
        assert_eq!(state.value(Field::Name), "Omar");
    }

    #[test]
    fn contact_view_renders_in_every_state() {
        let i18n = I18n::default();
        let mut state = State::new();
        update(&mut state, Message::Submit);
        let _invalid = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });

        let mut sending = filled();
        update(&mut sending, Message::Submit);
        let _sending = view(ViewContext {
            i18n: &i18n,
            state: &sending,
        });
    }
}
