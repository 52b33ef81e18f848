//! The boundary between the page logic and whatever renders it.
//!
//! Events arrive as [`UiEvent`] values from an abstract event source.
//! Changes go out through small collaborator traits. A [`Surface`] is
//! anything that implements all of them. Every [`EffectSink`] is a surface
//! that receives the changes as [`Effect`] values.

use crate::form::{Field, FormFields, SubmissionFeedbackState};
use crate::i18n::LocaleCode;
use crate::router::PathResolution;
use crate::widgets::{OverlayAction, OverlayKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Elements observed for scroll visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observed {
    Reveal,
    Counter,
    Bar,
}

/// A discrete UI event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A lead form was submitted with these raw values
    Submit { form: usize, fields: FormFields },

    /// A language menu's toggle button was clicked
    LangToggle { menu: usize },

    /// A locale link inside a language menu was clicked
    LangSelect { locale: LocaleCode },

    /// A click that no control handled
    DocumentClick,

    /// A key was pressed anywhere on the page
    KeyDown { key: String },

    /// An interaction with the drawer or the modal
    Overlay {
        overlay: OverlayKind,
        action: OverlayAction,
    },

    /// A FAQ question was clicked
    FaqClick { group: usize, item: usize },

    /// An observed element's visible fraction changed
    Intersection {
        kind: Observed,
        index: usize,
        ratio: f64,
    },
}

impl UiEvent {
    /// Whether the event is a click that bubbles up to the document.
    ///
    /// The language toggle stops propagation; every other click reaches the
    /// document and closes open language menus.
    pub fn bubbles_to_document(&self) -> bool {
        matches!(
            self,
            UiEvent::LangSelect { .. }
                | UiEvent::DocumentClick
                | UiEvent::Overlay {
                    action: OverlayAction::Open
                        | OverlayAction::Close
                        | OverlayAction::BackdropClick
                        | OverlayAction::ContentClick
                        | OverlayAction::AnchorLinkClick,
                    ..
                }
                | UiEvent::FaqClick { .. }
        )
    }
}

/// Elements whose presentation the page changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum Target {
    Drawer,
    DrawerBackdrop,
    Modal,
    LangMenu { menu: usize },
    FaqItem { group: usize, item: usize },
    Reveal { index: usize },
    Counter { index: usize },
    Bar { index: usize },
    LangCurrent,
}

/// Shows inline errors next to each field; `""` clears a field's message.
pub trait ErrorPresenter {
    fn show_errors(&mut self, form: usize, messages: &BTreeMap<Field, String>);
}

/// Shows or hides a form's success indicator.
pub trait SuccessPresenter {
    fn show_feedback(&mut self, form: usize, state: SubmissionFeedbackState, message: &str);
}

/// Clears every field of an accepted form.
pub trait FieldResetter {
    fn reset_fields(&mut self, form: usize);
}

/// Changes the active location.
pub trait Navigator {
    fn navigate(&mut self, resolution: &PathResolution);
}

/// Toggles classes, text and widths of widget elements.
pub trait WidgetPresenter {
    fn set_open(&mut self, target: Target, open: bool);
    fn set_visible(&mut self, target: Target);
    fn set_text(&mut self, target: Target, text: &str);
    fn set_width(&mut self, target: Target, percent: u8);
}

/// Everything the page needs from its renderer.
pub trait Surface: ErrorPresenter + SuccessPresenter + FieldResetter + Navigator + WidgetPresenter {}

impl<T> Surface for T where
    T: ErrorPresenter + SuccessPresenter + FieldResetter + Navigator + WidgetPresenter
{
}

/// A presentation change, as plain data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    Errors {
        form: usize,
        messages: BTreeMap<Field, String>,
    },
    Feedback {
        form: usize,
        state: SubmissionFeedbackState,
        message: String,
    },
    ResetFields {
        form: usize,
    },
    Navigate {
        href: String,
    },
    Open {
        #[serde(flatten)]
        target: Target,
        open: bool,
    },
    Visible {
        #[serde(flatten)]
        target: Target,
    },
    Text {
        #[serde(flatten)]
        target: Target,
        text: String,
    },
    Width {
        #[serde(flatten)]
        target: Target,
        percent: u8,
    },
}

/// Receives presentation changes as [`Effect`] values.
pub trait EffectSink {
    fn emit(&mut self, effect: Effect);
}

impl EffectSink for Vec<Effect> {
    fn emit(&mut self, effect: Effect) {
        self.push(effect);
    }
}

impl<T: EffectSink> ErrorPresenter for T {
    fn show_errors(&mut self, form: usize, messages: &BTreeMap<Field, String>) {
        self.emit(Effect::Errors {
            form,
            messages: messages.clone(),
        });
    }
}

impl<T: EffectSink> SuccessPresenter for T {
    fn show_feedback(&mut self, form: usize, state: SubmissionFeedbackState, message: &str) {
        self.emit(Effect::Feedback {
            form,
            state,
            message: message.to_string(),
        });
    }
}

impl<T: EffectSink> FieldResetter for T {
    fn reset_fields(&mut self, form: usize) {
        self.emit(Effect::ResetFields { form });
    }
}

impl<T: EffectSink> Navigator for T {
    fn navigate(&mut self, resolution: &PathResolution) {
        self.emit(Effect::Navigate {
            href: resolution.href(),
        });
    }
}

impl<T: EffectSink> WidgetPresenter for T {
    fn set_open(&mut self, target: Target, open: bool) {
        self.emit(Effect::Open { target, open });
    }

    fn set_visible(&mut self, target: Target) {
        self.emit(Effect::Visible { target });
    }

    fn set_text(&mut self, target: Target, text: &str) {
        self.emit(Effect::Text {
            target,
            text: text.to_string(),
        });
    }

    fn set_width(&mut self, target: Target, percent: u8) {
        self.emit(Effect::Width { target, percent });
    }
}
