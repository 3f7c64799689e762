//! Browser entry component: owns the calendar model and wires user actions to it.

use advent_core::{AdventCalendar, Catalog, CatalogError, DayRecord};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::clock::BrowserClock;
use crate::components::calendar_view::CalendarView;
use crate::dom;
use crate::feedback::{self, Feedback, FlashGeneration};
use crate::settings;
use crate::storage::WebStore;

const RESET_PROMPT: &str = "Are you sure you want to reset all opened doors?";

type Model = Rc<RefCell<Result<AdventCalendar<WebStore>, CatalogError>>>;

fn build_model() -> Result<AdventCalendar<WebStore>, CatalogError> {
    let catalog = Catalog::load()?;
    Ok(AdventCalendar::with_config(
        catalog,
        &BrowserClock,
        WebStore,
        settings::config(),
    ))
}

/// A transient per-door highlight (shake or bounce) and the ticket counter that
/// guards its clearing timer.
#[derive(Clone)]
struct FlashSlot {
    day: UseStateHandle<Option<u8>>,
    generation: FlashGeneration,
}

impl FlashSlot {
    /// Show `day` for `duration_ms`, then clear it unless a newer flash took over.
    fn flash(&self, day: u8, duration_ms: u32) {
        self.day.set(Some(day));
        let ticket = self.generation.begin();
        let slot = self.clone();
        let delay = i32::try_from(duration_ms).unwrap_or(i32::MAX);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = dom::sleep_ms(delay).await {
                dom::console_error(&dom::js_error_message(&err));
            }
            if slot.generation.is_current(ticket) {
                slot.day.set(None);
            }
        });
    }
}

fn build_activate(
    model: &Model,
    revealed: &UseStateHandle<Option<DayRecord>>,
    shaking: &FlashSlot,
    bouncing: &FlashSlot,
    refresh: &UseForceUpdateHandle,
) -> Callback<u8> {
    let model = model.clone();
    let revealed = revealed.clone();
    let shaking = shaking.clone();
    let bouncing = bouncing.clone();
    let refresh = refresh.clone();
    Callback::from(move |day: u8| {
        let config = settings::config();
        let feedback = match model.borrow_mut().as_mut() {
            Ok(calendar) => feedback::activate_door(calendar, day),
            Err(_) => return,
        };
        match feedback {
            Feedback::Shake(day) => shaking.flash(day, config.shake_ms),
            Feedback::Reveal { day, record } => {
                bouncing.flash(day, config.bounce_ms);
                revealed.set(Some(record));
                refresh.force_update();
            }
            Feedback::Failed(message) => {
                log::error!("{message}");
                dom::console_error(&message);
            }
        }
    })
}

fn build_reset(
    model: &Model,
    revealed: &UseStateHandle<Option<DayRecord>>,
    refresh: &UseForceUpdateHandle,
) -> Callback<()> {
    let model = model.clone();
    let revealed = revealed.clone();
    let refresh = refresh.clone();
    Callback::from(move |()| {
        let outcome = match model.borrow_mut().as_mut() {
            Ok(calendar) => feedback::reset_if_confirmed(calendar, dom::confirm(RESET_PROMPT)),
            Err(_) => return,
        };
        match outcome {
            Ok(false) => return,
            Ok(true) => {}
            Err(err) => {
                log::error!("Failed to reset calendar: {err}");
                dom::console_error(&format!("Failed to reset calendar: {err}"));
            }
        }
        revealed.set(None);
        refresh.force_update();
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let model: Model = use_mut_ref(build_model);
    let revealed = use_state(|| None::<DayRecord>);
    let shaking = FlashSlot {
        day: use_state(|| None::<u8>),
        generation: (*use_state(FlashGeneration::default)).clone(),
    };
    let bouncing = FlashSlot {
        day: use_state(|| None::<u8>),
        generation: (*use_state(FlashGeneration::default)).clone(),
    };
    let refresh = use_force_update();

    {
        let model = model.clone();
        use_effect_with((), move |()| {
            match model.borrow().as_ref() {
                Ok(calendar) => {
                    let status = calendar.status();
                    log::info!("Advent calendar loaded: {status:?}");
                    dom::console_log(&format!(
                        "Advent calendar loaded: {}",
                        serde_json::to_string(&status).unwrap_or_default()
                    ));
                }
                Err(err) => dom::console_error(&format!("Calendar data is invalid: {err}")),
            }
            || {}
        });
    }

    let on_activate = build_activate(&model, &revealed, &shaking, &bouncing, &refresh);
    let on_reset = build_reset(&model, &revealed, &refresh);
    let on_close_reward = {
        let revealed = revealed.clone();
        Callback::from(move |()| revealed.set(None))
    };

    let config = settings::config();
    let calendar = model.borrow();
    match calendar.as_ref() {
        Ok(calendar) => html! {
            <CalendarView
                today={calendar.today()}
                season_year={config.season_year}
                doors={calendar.door_states()}
                progress={calendar.progress()}
                revealed={(*revealed).clone()}
                shaking={*shaking.day}
                bouncing={*bouncing.day}
                stagger_ms={config.door_stagger_ms}
                {on_activate}
                {on_reset}
                {on_close_reward}
            />
        },
        Err(err) => html! {
            <main class="advent advent--error">
                <p role="alert">{ format!("The calendar could not be loaded: {err}") }</p>
            </main>
        },
    }
}
