use advent_core::{
    Activation, AdventCalendar, CalendarDate, Catalog, DayRecord, DoorState, FixedClock,
    MemoryStore, Progress, Reward,
};
use advent_web::components::calendar_view::CalendarView;
use advent_web::components::date_banner::DateBanner;
use advent_web::components::door::Door;
use advent_web::components::modal::Modal;
use advent_web::components::reward::RewardView;
use advent_web::components::stats_bar::StatsBar;
use futures::executor::block_on;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn december(day: u8) -> CalendarDate {
    CalendarDate::new(day, 12).unwrap()
}

fn door_props(door: DoorState) -> advent_web::components::door::Props {
    advent_web::components::door::Props {
        door,
        shaking: false,
        bouncing: false,
        entrance_delay_ms: 0,
        on_activate: Callback::noop(),
    }
}

#[test]
fn locked_door_renders_lock_icon_and_no_open_class() {
    let props = door_props(DoorState {
        day: 20,
        locked: true,
        opened: true,
    });
    let html = block_on(LocalServerRenderer::<Door>::with_props(props).render());
    assert!(html.contains("locked"));
    assert!(!html.contains(" open"));
    assert!(html.contains("\u{1F512}"));
    assert!(html.contains("data-day=\"20\""));
}

#[test]
fn opened_door_renders_open_and_feedback_classes() {
    let mut props = door_props(DoorState {
        day: 3,
        locked: false,
        opened: true,
    });
    props.bouncing = true;
    props.entrance_delay_ms = 100;
    let html = block_on(LocalServerRenderer::<Door>::with_props(props).render());
    assert!(html.contains("unlocked"));
    assert!(html.contains("open"));
    assert!(html.contains("bounce"));
    assert!(html.contains("animation-delay: 100ms"));

    let mut shaking = door_props(DoorState {
        day: 24,
        locked: true,
        opened: false,
    });
    shaking.shaking = true;
    let html = block_on(LocalServerRenderer::<Door>::with_props(shaking).render());
    assert!(html.contains("shake"));
}

#[test]
fn stats_bar_renders_counts_and_percent() {
    let props = advent_web::components::stats_bar::Props {
        progress: Progress {
            unlocked_count: 19,
            opened_count: 2,
            percent_opened: 8,
        },
    };
    let html = block_on(LocalServerRenderer::<StatsBar>::with_props(props).render());
    assert!(html.contains("daysUnlocked"));
    assert!(html.contains(">19<"));
    assert!(html.contains(">2<"));
    assert!(html.contains("8%"));
}

#[test]
fn date_banner_renders_label_and_year() {
    let props = advent_web::components::date_banner::Props {
        today: december(19),
        season_year: 2025,
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DateBanner>::with_props(props).render());
    assert!(html.contains("Today is: December 19, 2025"));
    assert!(html.contains("resetBtn"));
}

#[test]
fn reward_view_picks_element_by_kind() {
    let image = DayRecord {
        day: 4,
        reward: Reward::new("img/hug.png"),
        text: "Sometimes, all you need is just a warm hug".to_string(),
    };
    let html = block_on(
        LocalServerRenderer::<RewardView>::with_props(advent_web::components::reward::Props {
            record: image,
        })
        .render(),
    );
    assert!(html.contains("<img"));
    assert!(html.contains("/img/hug.png"));
    assert!(html.contains("Surprise Day 4"));
    assert!(html.contains("warm hug"));

    let video = DayRecord {
        day: 24,
        reward: Reward::new("media/sleigh.mp4"),
        text: "Merry Christmas!".to_string(),
    };
    let html = block_on(
        LocalServerRenderer::<RewardView>::with_props(advent_web::components::reward::Props {
            record: video,
        })
        .render(),
    );
    assert!(html.contains("<video"));
    assert!(!html.contains("<img"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    let open_props = advent_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Day 1"),
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal__header"));
    assert!(html.contains("Day 1"));

    let closed_props = advent_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Day 1"),
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn calendar_view_renders_model_snapshot() {
    let store = MemoryStore::new();
    let mut calendar = AdventCalendar::new(
        Catalog::load().unwrap(),
        &FixedClock(december(19)),
        store,
    );
    let Activation::Revealed { record, .. } = calendar.activate(1).unwrap() else {
        panic!("door 1 should open on December 19");
    };

    let props = advent_web::components::calendar_view::Props {
        today: calendar.today(),
        season_year: 2025,
        doors: calendar.door_states(),
        progress: calendar.progress(),
        revealed: Some(record),
        shaking: None,
        bouncing: Some(1),
        stagger_ms: 50,
        on_activate: Callback::noop(),
        on_reset: Callback::noop(),
        on_close_reward: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CalendarView>::with_props(props).render());
    assert_eq!(html.matches("calendar-door").count(), 24);
    assert_eq!(html.matches("\u{1F512}").count(), 5);
    assert!(html.contains("calendarGrid"));
    assert!(html.contains("doorModal"));
    assert!(html.contains("Orange"));
    assert!(html.contains("4%"));
}

#[test]
fn calendar_view_keeps_modal_closed_without_a_reward() {
    let calendar = AdventCalendar::new(
        Catalog::load().unwrap(),
        &FixedClock(december(19)),
        MemoryStore::new(),
    );
    let props = advent_web::components::calendar_view::Props {
        today: calendar.today(),
        season_year: 2025,
        doors: calendar.door_states(),
        progress: calendar.progress(),
        revealed: None,
        shaking: Some(20),
        bouncing: None,
        stagger_ms: 50,
        on_activate: Callback::noop(),
        on_reset: Callback::noop(),
        on_close_reward: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CalendarView>::with_props(props).render());
    assert!(!html.contains("doorModal"));
    assert!(!html.contains("modalImage"));
    assert!(html.contains("shake"));
}
