use tacs_figures::composer::{Layout, Orientation, PanelRef};
use tacs_figures::data::time_range::TimeRange;
use tacs_figures::data::trace_look::{Rgba, TraceLook};
use tacs_figures::data::waveform::{generate, Waveform};
use tacs_figures::FigureError;

fn wave() -> Waveform {
    let t = TimeRange::arange(0.0, 1.0, 0.01).unwrap();
    generate(1.0, 4.0, &t, 0.0).unwrap()
}

#[test]
fn empty_grid_is_a_layout_error() {
    assert!(matches!(Layout::compose((0, 2)), Err(FigureError::Layout(_))));
    assert!(matches!(Layout::compose((2, 0)), Err(FigureError::Layout(_))));
}

#[test]
fn two_by_two_suppresses_interior_labels() {
    let mut layout = Layout::compose((2, 2)).unwrap();
    layout.set_axis_labels_all("time (sec)", "Amplitude (mV)");

    let tl = PanelRef::new(0, 0);
    let tr = PanelRef::new(0, 1);
    let bl = PanelRef::new(1, 0);
    let br = PanelRef::new(1, 1);

    assert_eq!(layout.shown_x_label(tl), None);
    assert_eq!(layout.shown_x_label(tr), None);
    assert_eq!(layout.shown_x_label(bl), Some("time (sec)"));
    assert_eq!(layout.shown_x_label(br), Some("time (sec)"));

    assert_eq!(layout.shown_y_label(tl), Some("Amplitude (mV)"));
    assert_eq!(layout.shown_y_label(bl), Some("Amplitude (mV)"));
    assert_eq!(layout.shown_y_label(tr), None);
    assert_eq!(layout.shown_y_label(br), None);
}

#[test]
fn hidden_panel_below_hands_x_label_to_panel_above() {
    let mut layout = Layout::compose((2, 1)).unwrap();
    let top = PanelRef::new(0, 0);
    let bottom = PanelRef::new(1, 0);
    layout.hide(bottom).unwrap();
    layout.set_axis_labels_all("time (sec)", "Amplitude (mV)");

    assert!(layout.is_bottom_of_column(top));
    assert_eq!(layout.shown_x_label(top), Some("time (sec)"));
    assert_eq!(layout.shown_x_label(bottom), None);
    assert_eq!(layout.visible_panels().count(), 1);
}

#[test]
fn hidden_panel_on_the_left_hands_y_label_right() {
    let mut layout = Layout::compose((1, 2)).unwrap();
    layout.hide(PanelRef::new(0, 0)).unwrap();
    layout.set_axis_labels_all("t", "v");
    assert_eq!(layout.shown_y_label(PanelRef::new(0, 1)), Some("v"));
}

#[test]
fn hidden_top_right_keeps_bottom_right_x_label() {
    let mut layout = Layout::compose((2, 2)).unwrap();
    layout.hide(PanelRef::new(0, 1)).unwrap();
    layout.set_axis_labels_all("x", "y");
    assert_eq!(layout.shown_x_label(PanelRef::new(1, 1)), Some("x"));
    assert_eq!(layout.shown_x_label(PanelRef::new(0, 0)), None);
    assert_eq!(layout.shown_y_label(PanelRef::new(1, 1)), None);
    assert_eq!(
        layout.hidden_slots().collect::<Vec<_>>(),
        vec![PanelRef::new(0, 1)]
    );
}

#[test]
fn labels_only_show_where_set() {
    let mut layout = Layout::compose((2, 1)).unwrap();
    layout
        .set_axis_labels(PanelRef::new(1, 0), Some("time (sec)"), Some("Amplitude (mV)"))
        .unwrap();
    assert_eq!(layout.shown_y_label(PanelRef::new(0, 0)), None);
    assert_eq!(layout.shown_y_label(PanelRef::new(1, 0)), Some("Amplitude (mV)"));
}

#[test]
fn hidden_or_out_of_range_slots_reject_content() {
    let mut layout = Layout::compose((2, 2)).unwrap();
    let hidden = PanelRef::new(0, 1);
    layout.hide(hidden).unwrap();

    assert!(matches!(
        layout.add_trace(hidden, wave(), TraceLook::default()),
        Err(FigureError::Layout(_))
    ));
    assert!(matches!(
        layout.set_title(hidden, "X", true, 0.1),
        Err(FigureError::Layout(_))
    ));
    assert!(matches!(
        layout.add_marker(hidden, Orientation::Vertical, 1.0, TraceLook::default(), None),
        Err(FigureError::Layout(_))
    ));
    assert!(matches!(
        layout.add_trace(PanelRef::new(2, 0), wave(), TraceLook::default()),
        Err(FigureError::Layout(_))
    ));
    assert!(matches!(
        layout.hide(PanelRef::new(0, 5)),
        Err(FigureError::Layout(_))
    ));
    assert!(matches!(
        layout.set_legend_source(hidden),
        Err(FigureError::Layout(_))
    ));
}

#[test]
fn panels_with_content_or_legend_duty_cannot_be_hidden() {
    let mut layout = Layout::compose((1, 2)).unwrap();
    let a = PanelRef::new(0, 0);
    let b = PanelRef::new(0, 1);
    layout.add_cycled_trace(a, wave()).unwrap();
    assert!(matches!(layout.hide(a), Err(FigureError::Layout(_))));

    layout.set_legend_source(b).unwrap();
    assert!(matches!(layout.hide(b), Err(FigureError::Layout(_))));
}

#[test]
fn cycled_traces_take_successive_palette_colours() {
    let mut layout = Layout::compose((1, 1)).unwrap();
    let at = PanelRef::new(0, 0);
    layout.add_cycled_trace(at, wave()).unwrap();
    layout.add_trace(at, wave(), TraceLook::colored(Rgba::BLUE)).unwrap();
    layout.add_cycled_trace(at, wave()).unwrap();
    let panel = layout.panel(at).unwrap();
    assert_eq!(panel.traces[0].look.color, TraceLook::alloc_color(0));
    assert_eq!(panel.traces[1].look.color, Rgba::BLUE);
    assert_eq!(panel.traces[2].look.color, TraceLook::alloc_color(2));
}

#[test]
fn y_limit_override_is_validated_and_stored() {
    let mut layout = Layout::compose((1, 1)).unwrap();
    let at = PanelRef::new(0, 0);
    assert!(matches!(
        layout.set_y_limits(at, (2.0, -1.0)),
        Err(FigureError::InvalidParameter(_))
    ));
    assert!(matches!(
        layout.set_y_limits(at, (f64::NAN, 1.0)),
        Err(FigureError::InvalidParameter(_))
    ));
    layout.set_y_limits(at, (-1.0, 2.0)).unwrap();
    assert_eq!(layout.panel(at).unwrap().y_limits, Some((-1.0, 2.0)));
}

#[test]
fn annotations_and_markers_are_recorded_in_order() {
    let mut layout = Layout::compose((1, 1)).unwrap();
    let at = PanelRef::new(0, 0);
    layout.annotate(at, "4 Hz", (0.1, 1.5), 12.0).unwrap();
    layout.annotate(at, "6 Hz", (1.25, 1.5), 12.0).unwrap();
    layout
        .add_marker(at, Orientation::Vertical, 1.0, TraceLook::default(), Some("Onset of tACS"))
        .unwrap();
    layout
        .add_marker(at, Orientation::Horizontal, 0.0, TraceLook::default(), None)
        .unwrap();

    let panel = layout.panel(at).unwrap();
    let texts: Vec<&str> = panel.annotations.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, ["4 Hz", "6 Hz"]);
    assert_eq!(panel.markers.len(), 2);
    assert_eq!(panel.legend_entries().len(), 1);
    assert!(layout.annotate(at, "bad", (f64::NAN, 0.0), 12.0).is_err());
    assert!(layout.annotate(at, "bad", (0.0, 0.0), 0.0).is_err());
}

#[test]
fn data_ranges_cover_all_traces() {
    let mut layout = Layout::compose((1, 1)).unwrap();
    let at = PanelRef::new(0, 0);
    let later = TimeRange::arange(1.0, 2.0, 0.01).unwrap();
    layout.add_cycled_trace(at, wave()).unwrap();
    layout
        .add_cycled_trace(at, generate(2.0, 4.0, &later, 0.0).unwrap())
        .unwrap();
    let panel = layout.panel(at).unwrap();
    let (x0, x1) = panel.data_x_range().unwrap();
    assert_eq!(x0, 0.0);
    assert!((x1 - 1.99).abs() < 1e-9);
    let (y0, y1) = panel.data_y_range().unwrap();
    assert!(y0 < -1.9 && y1 > 1.9);
}
