use anyhow::{Context, Result, bail, ensure};
use advent_core::{
    Activation, AdventCalendar, CalendarDate, Catalog, DEFAULT_STORAGE_KEY, DOOR_COUNT,
    FixedClock, MemoryStore, is_locked_on,
};

use super::ScenarioCtx;

fn catalog() -> Result<Catalog> {
    Catalog::load().context("bundled catalog is invalid")
}

fn december(day: u8) -> Result<FixedClock> {
    Ok(FixedClock(CalendarDate::new(day, 12)?))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn expected_percent(opened: usize) -> u8 {
    // round-half-up of opened / 24 * 100
    let value = (opened as f64 / f64::from(DOOR_COUNT) * 100.0 + 0.5).floor();
    value as u8
}

pub fn smoke(ctx: &ScenarioCtx) -> Result<usize> {
    let store = MemoryStore::new();
    let mut calendar = AdventCalendar::new(catalog()?, &FixedClock(ctx.today), store);
    let mut checks = 0;
    let mut revealed = 0;
    for day in 1..=DOOR_COUNT {
        let outcome = calendar.activate(day)?;
        let locked = calendar.is_locked(day);
        ensure!(
            outcome.is_revealed() != locked,
            "door {day} on {} gave {outcome:?} while locked={locked}",
            ctx.today
        );
        if outcome.is_revealed() {
            revealed += 1;
        }
        checks += 1;
    }
    let progress = calendar.progress();
    ensure!(
        progress.unlocked_count == revealed,
        "unlocked {} but revealed {revealed}",
        progress.unlocked_count
    );
    ensure!(progress.opened_count == revealed, "opened count drifted");
    ensure!(
        progress.percent_opened == expected_percent(revealed),
        "percent {} for {revealed} doors",
        progress.percent_opened
    );
    if ctx.verbose {
        println!("   {:?}", calendar.status());
    }
    Ok(checks + 3)
}

pub fn gate(_ctx: &ScenarioCtx) -> Result<usize> {
    let catalog = catalog()?;
    let store = MemoryStore::new();
    let mut checks = 0;
    for month in 1..=12_u8 {
        for day in 1..=31_u8 {
            let today = CalendarDate::new(day, month)?;
            let calendar = AdventCalendar::new(catalog.clone(), &FixedClock(today), &store);
            for door in 1..=DOOR_COUNT {
                let expected = month != 12 || day < door;
                ensure!(
                    calendar.is_locked(door) == expected && is_locked_on(today, door) == expected,
                    "door {door} on {today}: expected locked={expected}"
                );
                checks += 1;
            }
        }
    }
    Ok(checks)
}

pub fn persistence(_ctx: &ScenarioCtx) -> Result<usize> {
    let store = MemoryStore::new();
    let clock = december(19)?;
    let mut calendar = AdventCalendar::new(catalog()?, &clock, store.clone());
    for day in [1, 7, 19] {
        calendar.activate(day)?;
    }
    drop(calendar);

    let reloaded = AdventCalendar::new(catalog()?, &clock, store.clone());
    let mut checks = 0;
    for day in 1..=DOOR_COUNT {
        let expected = matches!(day, 1 | 7 | 19);
        ensure!(
            reloaded.is_opened(day) == expected,
            "door {day} opened={} after reload",
            reloaded.is_opened(day)
        );
        checks += 1;
    }
    let raw = store
        .get(DEFAULT_STORAGE_KEY)
        .context("nothing was written to the store")?;
    ensure!(raw == "[1,7,19]", "unexpected stored record {raw}");
    Ok(checks + 1)
}

pub fn reset(_ctx: &ScenarioCtx) -> Result<usize> {
    let store = MemoryStore::new();
    let clock = december(19)?;
    let mut calendar = AdventCalendar::new(catalog()?, &clock, store.clone());
    calendar.activate(1)?;
    calendar.activate(19)?;
    ensure!(calendar.progress().opened_count == 2, "setup failed");

    calendar.reset()?;
    ensure!(calendar.progress().opened_count == 0, "reset left doors open");
    ensure!(
        !calendar.is_opened(1) && !calendar.is_opened(19),
        "reset left doors 1/19 open"
    );

    let reloaded = AdventCalendar::new(catalog()?, &clock, store);
    ensure!(reloaded.opened().is_empty(), "reload after reset is not empty");
    Ok(4)
}

pub fn replay(_ctx: &ScenarioCtx) -> Result<usize> {
    let store = MemoryStore::new();
    let mut calendar = AdventCalendar::new(catalog()?, &december(19)?, store);
    let first = calendar.activate(18)?;
    let second = calendar.activate(18)?;
    match (first, second) {
        (
            Activation::Revealed {
                newly_opened: true, ..
            },
            Activation::Revealed {
                record,
                newly_opened: false,
            },
        ) => ensure!(record.day == 18, "replayed the wrong record"),
        other => bail!("unexpected activation pair {other:?}"),
    }
    ensure!(calendar.opened().len() == 1, "replay duplicated the entry");

    let rejected = calendar.activate(20)?;
    ensure!(!rejected.is_revealed(), "door 20 opened on December 19");
    ensure!(calendar.opened().len() == 1, "rejection changed the set");
    Ok(4)
}

pub fn season(ctx: &ScenarioCtx) -> Result<usize> {
    let store = MemoryStore::new();
    let catalog = catalog()?;
    let mut checks = 0;
    for day in 1..=DOOR_COUNT {
        let mut calendar = AdventCalendar::new(catalog.clone(), &december(day)?, store.clone());
        ensure!(
            calendar.progress().opened_count == usize::from(day - 1),
            "day {day}: expected {} doors carried over",
            day - 1
        );
        match calendar.activate(day)? {
            Activation::Revealed {
                newly_opened: true, ..
            } => {}
            other => bail!("day {day}: door did not open fresh: {other:?}"),
        }
        if day < DOOR_COUNT {
            ensure!(
                !calendar.activate(day + 1)?.is_revealed(),
                "day {day}: tomorrow's door opened early"
            );
        }
        if ctx.verbose {
            println!("   December {day}: {}%", calendar.progress().percent_opened);
        }
        checks += 3;
    }
    let last = AdventCalendar::new(catalog, &december(DOOR_COUNT)?, store);
    ensure!(
        last.progress().percent_opened == 100,
        "season ended at {}%",
        last.progress().percent_opened
    );
    Ok(checks + 1)
}

pub fn malformed(_ctx: &ScenarioCtx) -> Result<usize> {
    let payloads = [
        "",
        "garbage",
        "{\"opened\":[1,2]}",
        "[\"1\",\"2\"]",
        "[1.5, 2]",
        "true",
        "[[1]]",
    ];
    let catalog = catalog()?;
    let clock = december(19)?;
    for raw in payloads {
        let store = MemoryStore::new();
        store.insert(DEFAULT_STORAGE_KEY, raw);
        let mut calendar = AdventCalendar::new(catalog.clone(), &clock, store.clone());
        ensure!(
            calendar.opened().is_empty(),
            "payload {raw:?} loaded as {:?}",
            calendar.opened()
        );
        calendar.activate(2)?;
        ensure!(
            store.get(DEFAULT_STORAGE_KEY).as_deref() == Some("[2]"),
            "payload {raw:?} was not overwritten"
        );
    }
    Ok(payloads.len() * 2)
}
