//! One rendered document: the state of every component on it, plus the
//! routing of UI events to them.
//!
//! `Page` is driven from outside. `dispatch` handles one event, `advance`
//! fires whatever timers are due, and `next_deadline` tells the event loop
//! when to call `advance` again. Time is always passed in; the page never
//! reads a clock.

use crate::config::SiteConfig;
use crate::form::{
    Field, FormFields, FormValidator, SubmissionFeedback, SubmissionFeedbackState,
    SubmissionOutcome,
};
use crate::i18n::{FormStrings, LocaleCode, MessageSource};
use crate::metrics::PageMetrics;
use crate::router::LocaleRouter;
use crate::ui::{Observed, Surface, Target, UiEvent};
use crate::widgets::{
    Accordion, Bar, Counter, LanguageMenus, Overlay, OverlayAction, OverlayKind, Reveal,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Shortest gap between counter frames.
const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Which components a page contains.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Number of lead forms
    pub forms: usize,

    /// Number of language menus
    pub lang_menus: usize,

    /// Item count of each FAQ group
    pub faq_groups: Vec<usize>,

    pub drawer: bool,
    pub modal: bool,

    pub counters: Vec<CounterSpec>,

    /// Number of reveal elements
    pub reveals: usize,

    /// Fill percentage of each bar
    pub bars: Vec<u8>,
}

/// A counter's `data-counter` target and `data-suffix`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CounterSpec {
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
}

pub struct Page {
    config: SiteConfig,
    strings: &'static FormStrings,
    group_separator: char,
    forms: Vec<SubmissionFeedback>,
    menus: LanguageMenus,
    faqs: Vec<Accordion>,
    drawer: Option<Overlay>,
    modal: Option<Overlay>,
    counters: Vec<Counter>,
    reveals: Vec<Reveal>,
    bars: Vec<Bar>,
    next_frame: Option<Instant>,
    metrics: PageMetrics,
}

impl Page {
    pub fn new(mut config: SiteConfig, layout: &PageLayout) -> Self {
        config.frame_interval = config.frame_interval.max(MIN_FRAME_INTERVAL);
        let strings = FormStrings::for_locale(&config.html_lang);
        let group_separator = config
            .locales
            .get(&config.html_lang)
            .unwrap_or_else(|| config.locales.default_locale())
            .group_separator;

        Self {
            strings,
            group_separator,
            forms: (0..layout.forms)
                .map(|_| SubmissionFeedback::new(config.success_display))
                .collect(),
            menus: LanguageMenus::new(layout.lang_menus),
            faqs: layout.faq_groups.iter().map(|&n| Accordion::new(n)).collect(),
            drawer: layout.drawer.then(|| Overlay::new(OverlayKind::Drawer)),
            modal: layout.modal.then(|| Overlay::new(OverlayKind::Modal)),
            counters: layout
                .counters
                .iter()
                .map(|c| Counter::new(c.target, c.suffix.clone(), config.counter_duration))
                .collect(),
            reveals: vec![Reveal::default(); layout.reveals],
            bars: layout.bars.iter().map(|&v| Bar::new(v)).collect(),
            next_frame: None,
            metrics: PageMetrics::new(),
            config,
        }
    }

    /// Initial presentation: the current-language label.
    pub fn init(&mut self, surface: &mut impl Surface) {
        let label = self.config.locales.label(&self.config.html_lang);
        surface.set_text(Target::LangCurrent, label);
        info!(
            lang = %self.config.html_lang,
            path = %self.config.current_path,
            forms = self.forms.len(),
            "Page initialized"
        );
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    /// The current location, updated by locale switches.
    pub fn current_path(&self) -> &str {
        &self.config.current_path
    }

    pub fn feedback_state(&self, form: usize) -> Option<SubmissionFeedbackState> {
        self.forms.get(form).map(SubmissionFeedback::state)
    }

    /// The earliest moment `advance` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.forms
            .iter()
            .filter_map(SubmissionFeedback::next_deadline)
            .chain(self.next_frame)
            .min()
    }

    /// Handle one UI event at time `now`.
    ///
    /// Timers already due at `now` fire first, so an event never lands
    /// before a revert that was scheduled ahead of it.
    pub fn dispatch(&mut self, event: UiEvent, now: Instant, surface: &mut impl Surface) {
        self.advance(now, surface);
        let bubbles = event.bubbles_to_document();

        match event {
            UiEvent::Submit { form, fields } => self.submit(form, &fields, now, surface),
            UiEvent::LangToggle { menu } => match self.menus.toggle(menu) {
                Some(open) => surface.set_open(Target::LangMenu { menu }, open),
                None => warn!(menu, "Toggle for unknown language menu"),
            },
            UiEvent::LangSelect { locale } => self.switch_locale(&locale, surface),
            UiEvent::DocumentClick => {}
            UiEvent::KeyDown { key } => {
                if key == "Escape" {
                    self.overlay(OverlayKind::Drawer, OverlayAction::Escape, surface);
                    self.overlay(OverlayKind::Modal, OverlayAction::Escape, surface);
                }
            }
            UiEvent::Overlay { overlay, action } => self.overlay(overlay, action, surface),
            UiEvent::FaqClick { group, item } => self.faq_click(group, item, surface),
            UiEvent::Intersection { kind, index, ratio } => {
                self.intersection(kind, index, ratio, now, surface)
            }
        }

        if bubbles {
            for menu in self.menus.document_click() {
                surface.set_open(Target::LangMenu { menu }, false);
            }
        }
    }

    /// Fire due success reverts and counter frames.
    pub fn advance(&mut self, now: Instant, surface: &mut impl Surface) {
        for (form, feedback) in self.forms.iter_mut().enumerate() {
            for _ in 0..feedback.advance(now) {
                debug!(form, "Success message reverted");
                self.metrics.record_success_revert();
                surface.show_feedback(form, SubmissionFeedbackState::Idle, "");
            }
        }

        if self.next_frame.is_some_and(|at| at <= now) {
            for (index, counter) in self.counters.iter_mut().enumerate() {
                if let Some(text) = counter.frame(now, self.group_separator) {
                    surface.set_text(Target::Counter { index }, &text);
                }
            }
            self.next_frame = self
                .counters
                .iter()
                .any(Counter::is_animating)
                .then(|| now + self.config.frame_interval);
        }
    }

    fn submit(&mut self, form: usize, fields: &FormFields, now: Instant, surface: &mut impl Surface) {
        let Some(feedback) = self.forms.get_mut(form) else {
            warn!(form, "Submit for unknown form");
            return;
        };

        match FormValidator::submit(fields) {
            SubmissionOutcome::Accepted => {
                let cleared: BTreeMap<Field, String> =
                    Field::ALL.iter().map(|&f| (f, String::new())).collect();
                surface.show_errors(form, &cleared);
                surface.reset_fields(form);
                feedback.on_accepted(now);
                surface.show_feedback(
                    form,
                    SubmissionFeedbackState::ShowingSuccess,
                    self.strings.success(),
                );
                self.metrics.record_accepted();
                info!(form, "Lead form accepted");
            }
            SubmissionOutcome::Rejected { errors } => {
                surface.show_errors(form, &errors.messages(self.strings));
                self.metrics.record_rejected();
                debug!(
                    form,
                    failures = ?errors.failures().collect::<Vec<_>>(),
                    "Lead form rejected"
                );
            }
        }
    }

    fn switch_locale(&mut self, locale: &LocaleCode, surface: &mut impl Surface) {
        let resolution =
            LocaleRouter::new(&self.config.locales).resolve(&self.config.current_path, locale);
        self.metrics.record_locale_switch(resolution.fell_back);
        info!(locale = %locale, href = %resolution, "Switching locale");
        surface.navigate(&resolution);
        self.config.current_path = resolution.href();
    }

    fn overlay(&mut self, kind: OverlayKind, action: OverlayAction, surface: &mut impl Surface) {
        let slot = match kind {
            OverlayKind::Drawer => &mut self.drawer,
            OverlayKind::Modal => &mut self.modal,
        };
        let Some(overlay) = slot.as_mut() else {
            debug!(?kind, ?action, "Page has no such overlay");
            return;
        };

        let was_open = overlay.is_open();
        let open = overlay.apply(action);
        if open == was_open && action != OverlayAction::Open {
            return;
        }
        match kind {
            OverlayKind::Drawer => {
                surface.set_open(Target::Drawer, open);
                surface.set_open(Target::DrawerBackdrop, open);
            }
            OverlayKind::Modal => surface.set_open(Target::Modal, open),
        }
    }

    fn faq_click(&mut self, group: usize, item: usize, surface: &mut impl Surface) {
        let Some(faq) = self.faqs.get_mut(group) else {
            warn!(group, "Click in unknown FAQ group");
            return;
        };
        let previous = faq.open_item();
        if !faq.click(item) {
            warn!(group, item, "Click on unknown FAQ item");
            return;
        }
        if let Some(prev) = previous.filter(|&p| p != item) {
            surface.set_open(Target::FaqItem { group, item: prev }, false);
        }
        surface.set_open(Target::FaqItem { group, item }, faq.is_open(item));
    }

    fn intersection(
        &mut self,
        kind: Observed,
        index: usize,
        ratio: f64,
        now: Instant,
        surface: &mut impl Surface,
    ) {
        match kind {
            Observed::Reveal => match self.reveals.get_mut(index) {
                Some(reveal) => {
                    if reveal.on_intersection(ratio) {
                        surface.set_visible(Target::Reveal { index });
                    }
                }
                None => warn!(index, "Intersection for unknown reveal"),
            },
            Observed::Counter => match self.counters.get_mut(index) {
                Some(counter) => {
                    if counter.on_visible(ratio, now) {
                        debug!(index, "Counter started");
                        let first = now + self.config.frame_interval;
                        self.next_frame = Some(self.next_frame.map_or(first, |at| at.min(first)));
                    }
                }
                None => warn!(index, "Intersection for unknown counter"),
            },
            Observed::Bar => match self.bars.get(index) {
                Some(bar) => {
                    if let Some(percent) = bar.on_intersection(ratio) {
                        surface.set_width(Target::Bar { index }, percent);
                    }
                }
                None => warn!(index, "Intersection for unknown bar"),
            },
        }
    }
}
