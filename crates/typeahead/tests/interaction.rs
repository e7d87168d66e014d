//! Tests for keyboard, pointer and focus interaction.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use typeahead::{
    CommitOutcome, EventOutcome, FetchError, Key, Point, Rect, RegionFn, Signal, TextRenderer,
    Typeahead, TypeaheadConfig, TypeaheadError, TypeaheadItem,
};

async fn ab_lookup(_search: String) -> Result<Vec<TypeaheadItem<u32>>, FetchError> {
    Ok(vec![
        TypeaheadItem::new("Abacus", 1),
        TypeaheadItem::new("Abroad", 2),
    ])
}

fn record_choices(widget: &Typeahead<u32>) -> Arc<Mutex<Vec<TypeaheadItem<u32>>>> {
    let chosen = Arc::new(Mutex::new(Vec::new()));
    let sink = chosen.clone();
    widget
        .option_chosen()
        .connect(move |option: &TypeaheadItem<u32>| sink.lock().push(option.clone()));
    chosen
}

/// A focused widget showing the "ab" options.
async fn typed_ab(config: TypeaheadConfig) -> Typeahead<u32> {
    let mut widget = Typeahead::<u32>::new(config, ab_lookup).unwrap();
    widget.on_focus();
    widget.on_text_changed("ab");
    widget.process_next().await;
    widget
}

#[tokio::test(start_paused = true)]
async fn test_down_down_enter_commits_second_option() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;
    let chosen = record_choices(&widget);

    assert!(widget.on_key_down(Key::from_code("ArrowDown")).unwrap());
    assert!(widget.on_key_down(Key::from_code("ArrowDown")).unwrap());
    assert!(widget.on_key_down(Key::from_code("Enter")).unwrap());

    assert_eq!(*chosen.lock(), vec![TypeaheadItem::new("Abroad", 2)]);
    assert!(!widget.is_open());
    assert_eq!(widget.text(), "Abroad");
}

#[tokio::test(start_paused = true)]
async fn test_legacy_key_codes_drive_selection() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;

    widget.on_key_down(Key::from_key_code(38)).unwrap();
    assert_eq!(widget.selection_index(), Some(1));
    widget.on_key_down(Key::from_key_code(38)).unwrap();
    widget.on_key_down(Key::from_key_code(38)).unwrap();
    assert_eq!(widget.selection_index(), None);

    widget.on_key_down(Key::from_key_code(27)).unwrap();
    assert!(!widget.is_open());

    // Typing reopens the panel.
    widget.on_key_down(Key::from_key_code(65)).unwrap();
    assert!(widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_direct_cursor_and_commit_calls() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;
    let chosen = record_choices(&widget);

    assert_eq!(widget.commit_selection().unwrap(), None);
    assert_eq!(widget.move_selection_up(), Some(1));
    assert_eq!(widget.move_selection_up(), Some(0));
    assert_eq!(widget.move_selection_down(), Some(1));
    assert_eq!(widget.commit_selection().unwrap(), Some(CommitOutcome::Chosen));

    assert_eq!(*chosen.lock(), vec![TypeaheadItem::new("Abroad", 2)]);
    assert_eq!(widget.selected_option().map(|o| o.text()), Some("Abroad"));
    assert!(!widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_recommit_keeps_latest_label() {
    let mut widget = Typeahead::<u32>::new(TypeaheadConfig::default(), |search: String| async move {
        let label = if search == "ab" { "Abroad" } else { "Abroad (overseas)" };
        Ok::<_, FetchError>(vec![TypeaheadItem::new(label, 2)])
    })
    .unwrap();
    let chosen = record_choices(&widget);

    widget.on_text_changed("ab");
    widget.process_next().await;
    widget.on_option_activated(0).unwrap();

    widget.on_text_changed("abr");
    widget.process_next().await;
    assert_eq!(widget.on_option_activated(0).unwrap(), CommitOutcome::Unchanged);

    assert_eq!(chosen.lock().len(), 1);
    assert_eq!(
        widget.selected_option().map(|o| o.text()),
        Some("Abroad (overseas)")
    );
}

#[tokio::test(start_paused = true)]
async fn test_enter_without_selection_does_nothing() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;
    let chosen = record_choices(&widget);

    assert!(!widget.on_key_down(Key::Enter).unwrap());
    assert!(chosen.lock().is_empty());
    assert!(widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_option_click_commits() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;
    let chosen = record_choices(&widget);

    widget.on_option_activated(0).unwrap();
    widget.on_focus();
    widget.on_option_activated(0).unwrap();

    assert_eq!(*chosen.lock(), vec![TypeaheadItem::new("Abacus", 1)]);
    assert!(!widget.is_open());

    let err = widget.on_option_activated(5).unwrap_err();
    assert_eq!(err, TypeaheadError::InvalidSelectionIndex { index: 5, len: 2 });
}

#[tokio::test(start_paused = true)]
async fn test_mounted_outside_clicks() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;
    let pointer = Signal::<Point>::new();
    widget.mount(Rect::new(0.0, 0.0, 240.0, 160.0), &pointer);
    assert!(widget.is_mounted());

    pointer.emit(Point::new(120.0, 80.0));
    assert_eq!(widget.process_pending(), 1);
    assert!(widget.is_open());

    pointer.emit(Point::new(400.0, 80.0));
    assert_eq!(
        widget.process_next().await,
        Some(EventOutcome::PointerPressed { closed: true })
    );
    assert!(!widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_unmount_stops_outside_clicks() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;
    let pointer = Signal::<Point>::new();
    widget.mount(RegionFn(|p: Point| p.x < 100.0), &pointer);

    widget.unmount();
    assert_eq!(pointer.connection_count(), 0);

    pointer.emit(Point::new(400.0, 80.0));
    assert_eq!(widget.process_pending(), 0);
    assert!(widget.is_open());
    assert!(!widget.on_outside_click(Point::new(400.0, 80.0)));
}

#[tokio::test(start_paused = true)]
async fn test_dropping_widget_disconnects_pointer_source() {
    let pointer = Signal::<Point>::new();
    {
        let mut widget = typed_ab(TypeaheadConfig::default()).await;
        widget.mount(Rect::new(0.0, 0.0, 10.0, 10.0), &pointer);
        assert_eq!(pointer.connection_count(), 1);
    }
    assert_eq!(pointer.connection_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_pointer_source_unmounts() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;
    let pointer = Signal::<Point>::new();
    let root = vec![
        Rect::new(0.0, 0.0, 200.0, 24.0),
        Rect::new(0.0, 24.0, 260.0, 120.0),
    ];
    widget.mount(root, &pointer);
    assert!(widget.is_mounted());

    drop(pointer);
    assert!(!widget.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn test_outside_clicks_ignored_when_detection_disabled() {
    let mut widget = typed_ab(TypeaheadConfig::focus_driven()).await;
    let pointer = Signal::<Point>::new();
    widget.mount(Rect::new(0.0, 0.0, 10.0, 10.0), &pointer);

    pointer.emit(Point::new(400.0, 80.0));
    assert_eq!(
        widget.process_next().await,
        Some(EventOutcome::PointerPressed { closed: false })
    );
    assert!(widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_blur_closes_after_grace() {
    let mut widget = typed_ab(TypeaheadConfig::focus_driven()).await;

    widget.on_blur();
    assert!(widget.is_open());

    assert_eq!(
        widget.process_next().await,
        Some(EventOutcome::BlurElapsed { closed: true })
    );
    assert!(!widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_option_click_within_grace_wins() {
    let mut widget = typed_ab(TypeaheadConfig::focus_driven()).await;
    let chosen = record_choices(&widget);

    widget.on_blur();
    tokio::time::sleep(Duration::from_millis(2)).await;
    widget.on_option_activated(1).unwrap();

    assert_eq!(chosen.lock().len(), 1);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(
        widget.process_next().await,
        Some(EventOutcome::BlurElapsed { closed: false })
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_blur_grace() {
    let config = TypeaheadConfig::default()
        .with_outside_click_detection(false)
        .with_blur_grace(Duration::from_millis(30));
    let mut widget = typed_ab(config).await;

    widget.on_blur();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(widget.process_pending(), 0);
    assert!(widget.is_open());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(widget.process_pending(), 1);
    assert!(!widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_focus_within_grace_keeps_panel_open() {
    let mut widget = typed_ab(TypeaheadConfig::focus_driven()).await;

    widget.on_blur();
    tokio::time::sleep(Duration::from_millis(5)).await;
    widget.on_focus();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(widget.process_pending(), 0);
    assert!(widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_focus_after_grace_supersedes_queued_close() {
    let mut widget = typed_ab(TypeaheadConfig::focus_driven()).await;

    widget.on_blur();
    tokio::time::sleep(Duration::from_millis(50)).await;
    // The close is queued but not applied yet.
    widget.on_focus();

    assert_eq!(
        widget.process_next().await,
        Some(EventOutcome::BlurElapsed { closed: false })
    );
    assert!(widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_blur_ignored_with_outside_click_detection() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;

    widget.on_blur();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(widget.process_pending(), 0);
    assert!(widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_render_follows_state() {
    let mut widget = typed_ab(TypeaheadConfig::default()).await;
    let mut input = TextRenderer::new();
    let mut list = TextRenderer::new();

    widget.on_key_down(Key::ArrowUp).unwrap();
    assert!(widget.render(&mut input, &mut list));
    assert_eq!(input.take(), "[ab]\n");
    assert_eq!(list.take(), "  Abacus\n> Abroad\n");

    widget.on_key_down(Key::Enter).unwrap();
    assert!(!widget.render(&mut input, &mut list));
    assert_eq!(input.take(), "[Abroad]\n");
    assert!(list.output().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_text_and_open_notifications() {
    let mut widget = Typeahead::<u32>::new(TypeaheadConfig::default(), ab_lookup).unwrap();
    let texts = Arc::new(Mutex::new(Vec::new()));
    let opens = Arc::new(Mutex::new(Vec::new()));
    let text_sink = texts.clone();
    let open_sink = opens.clone();
    widget
        .text_changed
        .connect(move |text: &String| text_sink.lock().push(text.clone()));
    widget
        .open_changed()
        .connect(move |open: &bool| open_sink.lock().push(*open));

    widget.on_focus();
    widget.on_text_changed("a");
    widget.on_text_changed("ab");
    widget.on_escape();
    widget.on_escape();

    assert_eq!(*texts.lock(), vec!["a".to_string(), "ab".to_string()]);
    assert_eq!(*opens.lock(), vec![true, false]);
}
