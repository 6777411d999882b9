//! Wires the demo state types onto fluxgate stores.
//!
//! One counter store stands in for a user session, one keyed collection holds
//! the paging state of every grid on the page, keyed by the grid's id.

use std::sync::Arc;

use anyhow::Result;
use fluxgate::{DispatcherRegistry, KeyedStoreCollection, SenderId, Store};
use uuid::Uuid;

mod actions;
mod config;
mod dispatchers;
mod logger;
mod paging;
mod state;
mod weather;

use actions::{CounterAction, GridAction};
use config::DemoConfig;
use dispatchers::{CounterDispatcher, GridDispatcher};
use paging::PageRequest;
use state::GridState;
use weather::WeatherProvider;

fn main() -> Result<()> {
    logger::init()?;
    log::info!("Starting fluxgate-demo");

    let config = DemoConfig::load();

    let mut registry = DispatcherRegistry::new();
    registry
        .register(Arc::new(CounterDispatcher))
        .register(Arc::new(GridDispatcher));

    run_counter(&registry, &config)?;
    run_grids(&registry, &config)?;

    log::info!("Exiting fluxgate-demo");
    Ok(())
}

fn run_counter(registry: &DispatcherRegistry, config: &DemoConfig) -> Result<()> {
    let mut counter = Store::<CounterDispatcher>::from_registry(registry)?;
    counter.subscribe(|change| {
        log::info!(
            "Counter is now {} (version {:?})",
            change.state.counter,
            change.marker.map(|m| m.version())
        );
    });

    let button = SenderId::new();
    for _ in 0..3 {
        counter.dispatch_from(button, CounterAction::Increment(config.counter_step).into())?;
    }
    counter.dispatch(CounterAction::Decrement(config.counter_step).into())?;

    println!("Counter: {}", counter.item().counter);
    Ok(())
}

fn run_grids(registry: &DispatcherRegistry, config: &DemoConfig) -> Result<()> {
    let provider = WeatherProvider::new(config.record_count);
    let mut grids = KeyedStoreCollection::<Uuid, GridDispatcher>::from_registry(registry)?;

    let grid_ids: Vec<Uuid> = (0..config.grids).map(|_| Uuid::new_v4()).collect();
    for (position, id) in grid_ids.iter().enumerate() {
        // Every grid opens on the first page
        let first_page = PageRequest::new(0, config.page_size);
        grids.add_store(*id, GridState::from_page_request(&first_page));

        let grid = grids.get_or_create_store(*id);
        grid.subscribe(move |change| {
            log::debug!("Grid {} moved to page {}", position, change.state.page());
        });

        // Each grid pages forward by its position
        let request = PageRequest::new(position * config.page_size, config.page_size);
        grid.dispatch(GridAction::from_page_request(&request).into())?;
    }

    for (position, id) in grid_ids.iter().enumerate() {
        let Some(state) = grids.get_item(id) else {
            continue;
        };
        let page = provider.get_items(&state.page_request());

        println!(
            "Grid {} - page {} ({} of {} rows)",
            position,
            state.page(),
            page.items.len(),
            page.total_item_count
        );
        for forecast in &page.items {
            println!(
                "  {}  {:>4}C  {:>4}F  {}",
                forecast.date,
                forecast.temperature_c,
                forecast.temperature_f(),
                forecast.summary
            );
        }
    }

    for id in &grid_ids {
        grids.remove_store(id);
    }
    Ok(())
}
