//! City lookup example driving the typeahead from scripted input.
//!
//! Run with: cargo run -p typeahead --example city_lookup
//!
//! Set `RUST_LOG=typeahead=debug` to watch lookups and state changes.

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use typeahead::{
    FetchError, FetchResult, Key, OptionListStyle, Point, Rect, Signal, TextRenderer, Typeahead,
    TypeaheadConfig, TypeaheadItem,
};
use typeahead_core::Color;
use typeahead_core::logging::targets;

const CITIES: &[(&str, u32)] = &[
    ("Bergen", 1),
    ("Berlin", 2),
    ("Bern", 3),
    ("Bordeaux", 4),
    ("Boston", 5),
    ("Bremen", 6),
    ("Brno", 7),
];

/// Pretend remote lookup: prefix search with some latency.
async fn lookup_cities(search: String) -> FetchResult<u32> {
    tokio::time::sleep(Duration::from_millis(40)).await;

    let needle = search.trim().to_lowercase();
    if needle == "error" {
        return Err(FetchError::failed("city service unavailable"));
    }
    Ok(CITIES
        .iter()
        .filter(|(name, _)| !needle.is_empty() && name.to_lowercase().starts_with(&needle))
        .map(|&city| TypeaheadItem::from(city))
        .collect())
}

fn show(label: &str, widget: &Typeahead<u32>) {
    let mut input = TextRenderer::new();
    let mut list = TextRenderer::new();
    widget.render(&mut input, &mut list);
    println!("--- {label}");
    print!("{}{}", input.output(), list.output());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> typeahead::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("{}=info,{}=warn", targets::WIDGET, targets::CORE))
            }),
        )
        .init();

    let style = OptionListStyle::default()
        .with_background(Color::from_rgb8(250, 250, 250))
        .with_border(Color::from_rgb8(120, 120, 120))
        .with_text(Color::from_rgb8(30, 30, 30))
        .with_active(Color::from_rgb8(0, 90, 200), Color::WHITE);
    let config = TypeaheadConfig::default()
        .with_debounce(Duration::from_millis(150))
        .with_style(style);
    let mut widget = Typeahead::<u32>::new(config, lookup_cities)?;

    widget
        .option_chosen()
        .connect(|city: &TypeaheadItem<u32>| println!("chosen: {} (id {})", city.text(), city.value()));
    widget
        .fetch_failed
        .connect(|err: &FetchError| println!("lookup failed: {err}"));

    let pointer = Signal::<Point>::new();
    // Input box plus the option panel below it.
    let root = vec![
        Rect::new(0.0, 0.0, 240.0, 28.0),
        Rect::new(0.0, 28.0, 240.0, 180.0),
    ];
    widget.mount(root, &pointer);

    widget.on_focus();
    for text in ["b", "be", "ber"] {
        widget.on_text_changed(text);
        tokio::time::sleep(Duration::from_millis(30)).await;
    }
    widget.process_next().await;
    show("typed \"ber\"", &widget);

    widget.on_key_down(Key::ArrowDown)?;
    widget.on_key_down(Key::ArrowDown)?;
    show("down, down", &widget);

    widget.on_key_down(Key::Enter)?;
    show("enter", &widget);

    widget.on_key_down(Key::Character('x'))?;
    widget.on_text_changed("bern");
    widget.process_next().await;
    show("typed \"bern\" (auto-matched)", &widget);

    widget.on_text_changed("error");
    widget.process_next().await;
    show("failed lookup keeps the list", &widget);

    pointer.emit(Point::new(500.0, 20.0));
    widget.process_pending();
    show("clicked outside", &widget);

    widget.unmount();
    Ok(())
}
