//! Typewriter wiring: one shared interval drives every animated element.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use js_sys::Date;
use web_sys::{Document, Element};

use super::{class_names, document, query_all, set_style};
use crate::config::SiteConfig;
use crate::error::PortfolioError;
use crate::typewriter::{
    Frame, TextCategory, Typewriter, TypewriterScheduler, TypewriterTiming, finished_styles, stagger_delay, typing_styles,
};

/// An animated element and whether it was forced onto one line while typing.
struct Slot {
    element: Element,
    unwrap_after: bool,
}

impl Slot {
    /// Show the caret, then capture the source text and blank the element.
    ///
    /// Styles go first: if one fails the element keeps its text.
    fn prepare(element: Element, nowrap: bool) -> Result<(Self, String), PortfolioError> {
        for (property, value) in typing_styles(nowrap) {
            set_style(&element, property, value)?;
        }
        let text = element.text_content().unwrap_or_default();
        element.set_text_content(Some(""));
        Ok((Self { element, unwrap_after: nowrap }, text))
    }

    fn apply(&self, frame: &Frame) -> Result<(), PortfolioError> {
        if let Some(text) = &frame.text {
            self.element.set_text_content(Some(text));
        }
        if frame.caret_removed {
            for (property, value) in finished_styles(self.unwrap_after) {
                set_style(&self.element, property, value)?;
            }
        }
        Ok(())
    }
}

pub fn init(config: &SiteConfig) -> Result<(), PortfolioError> {
    let document = document()?;
    let timings = &config.typewriter;

    for (index, element) in query_all(&document, &config.selectors.stagger)?.iter().enumerate() {
        set_style(element, "animation-delay", &stagger_delay(index, timings))?;
    }

    let mut scheduler = TypewriterScheduler::new();
    let mut slots = Vec::new();

    if let Some(name) = standalone_name(&document, config)? {
        match Slot::prepare(name, false) {
            Ok((slot, text)) => {
                scheduler.schedule(slots.len(), Typewriter::new(&text, TypewriterTiming::name_only(timings)));
                slots.push(slot);
            }
            Err(err) => log::warn!("typewriter: name heading left static: {err}"),
        }
    }

    for (index, element) in query_all(&document, &config.selectors.typewriter)?.into_iter().enumerate() {
        let classes = class_names(&element);
        let category = TextCategory::from_classes(classes.iter().map(String::as_str));
        // A failed element stays static; the rest still animate.
        let (slot, text) = match Slot::prepare(element, true) {
            Ok(prepared) => prepared,
            Err(err) => {
                log::warn!("typewriter: element {index} left static: {err}");
                continue;
            }
        };
        scheduler.schedule(slots.len(), Typewriter::new(&text, TypewriterTiming::sequenced(category, index, timings)));
        slots.push(slot);
    }

    if scheduler.is_idle() {
        return Ok(());
    }
    log::debug!("typewriter: {} elements scheduled", scheduler.active());
    drive(scheduler, slots, timings.tick_ms);
    Ok(())
}

/// The name heading, unless it already takes part in the typewriter sequence.
fn standalone_name(document: &Document, config: &SiteConfig) -> Result<Option<Element>, PortfolioError> {
    let Some(name) = document.query_selector(&config.selectors.name)? else {
        return Ok(None);
    };
    if name.matches(&config.selectors.typewriter)? {
        return Ok(None);
    }
    Ok(Some(name))
}

fn drive(scheduler: TypewriterScheduler, slots: Vec<Slot>, tick_ms: u32) {
    let started_ms = Date::now();
    let scheduler = Rc::new(RefCell::new(scheduler));
    let holder: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let holder_for_tick = Rc::clone(&holder);

    let tick = Interval::new(tick_ms.max(1), move || {
        let updates = scheduler.borrow_mut().advance_to(Date::now() - started_ms);
        for update in updates {
            let Some(slot) = slots.get(update.slot) else {
                continue;
            };
            if let Err(err) = slot.apply(&update.frame) {
                log::debug!("typewriter frame dropped: {err}");
            }
        }
        if scheduler.borrow().is_idle() {
            // Cancel on the next turn; the interval cannot drop itself mid-callback.
            let holder = Rc::clone(&holder_for_tick);
            Timeout::new(0, move || {
                holder.borrow_mut().take();
            })
            .forget();
        }
    });
    *holder.borrow_mut() = Some(tick);
}
