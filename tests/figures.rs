use tacs_figures::composer::PanelRef;
use tacs_figures::data::trace_look::{LineStyle, Rgba};
use tacs_figures::figures::{am, phase, tacs_effects};
use tacs_figures::legend::consolidate;
use tacs_figures::{FigureConfig, FigureKind};

#[test]
fn names_and_files_are_fixed() {
    let files: Vec<String> = FigureKind::ALL.iter().map(|k| k.file_name()).collect();
    assert_eq!(files, ["figure-output.png", "phase.png", "am.png"]);
    assert_eq!("phase".parse::<FigureKind>().unwrap(), FigureKind::Phase);
    assert!("Phase".parse::<FigureKind>().is_err());
}

#[test]
fn every_figure_builds_with_default_config() {
    let cfg = FigureConfig::default();
    for kind in FigureKind::ALL {
        let fig = kind.build(&cfg).unwrap();
        assert!(fig.validate().is_ok(), "{kind} has invalid geometry");
    }
}

#[test]
fn effects_figure_layout() {
    let fig = tacs_effects(0.01).unwrap();
    let layout = &fig.layout;
    assert_eq!(layout.shape(), (2, 2));
    assert!(layout.is_hidden(PanelRef::new(0, 1)));
    assert_eq!(fig.suptitle.as_ref().unwrap().text, "Effects of tACS");
    assert_eq!(fig.spacing.hspace, 0.3);
    assert_eq!(fig.legend_anchor, Some((0.57, 0.8)));

    let titles: Vec<String> = layout
        .visible_panels()
        .map(|(_, p)| p.title.as_ref().unwrap().text.clone())
        .collect();
    assert_eq!(titles, ["A", "B", "C"]);

    let b = layout.panel(PanelRef::new(1, 0)).unwrap();
    assert_eq!(b.y_limits, Some((-1.0, 2.0)));
    assert_eq!(b.annotations.len(), 2);
    assert_eq!(b.traces[1].waveform.frequency_hz, 6.0);

    let a = layout.panel(PanelRef::new(0, 0)).unwrap();
    assert_eq!(a.traces[1].waveform.amplitude_mv, 2.0);
    assert_eq!(a.traces[1].waveform.time().start(), 1.0);

    let c = layout.panel(PanelRef::new(1, 1)).unwrap();
    assert_eq!(c.traces.len(), 4);
    assert_eq!(c.traces[2].look.color, Rgba::BLUE);
    assert_eq!(c.traces[3].look.style, LineStyle::Dotted);

    // Top-left loses its x label; bottom-right keeps x but not y.
    assert_eq!(layout.shown_x_label(PanelRef::new(0, 0)), None);
    assert_eq!(layout.shown_x_label(PanelRef::new(1, 1)), Some("time (sec)"));
    assert_eq!(layout.shown_y_label(PanelRef::new(1, 1)), None);
}

#[test]
fn onset_marker_is_on_every_panel_but_in_the_legend_once() {
    let fig = tacs_effects(0.01).unwrap();
    for (_, panel) in fig.layout.visible_panels() {
        assert_eq!(panel.markers.len(), 1);
        assert_eq!(panel.markers[0].position, 1.0);
        assert_eq!(panel.markers[0].look.style, LineStyle::DashDot);
    }
    let legend = consolidate(&fig.layout);
    assert_eq!(legend.len(), 1);
    assert_eq!(legend[0].label, "Onset of tACS");
}

#[test]
fn time_resolution_controls_sample_count() {
    let fig = tacs_effects(0.005).unwrap();
    let a = fig.layout.panel(PanelRef::new(0, 0)).unwrap();
    assert_eq!(a.traces[0].waveform.len(), 200);
}

#[test]
fn phase_figure_shifts_by_eight_radians() {
    let fig = phase(0.01).unwrap();
    let top = fig.layout.panel(PanelRef::new(0, 0)).unwrap();
    assert_eq!(top.traces[1].waveform.phase_rad, 8.0);
    let bottom = fig.layout.panel(PanelRef::new(1, 0)).unwrap();
    assert_eq!(bottom.traces[1].waveform.amplitude_mv, 0.9);
    assert_eq!(fig.layout.shown_y_label(PanelRef::new(0, 0)), None);
    assert_eq!(
        fig.layout.shown_x_label(PanelRef::new(1, 0)),
        Some("time (sec)")
    );
    assert!(consolidate(&fig.layout).is_empty());
}

#[test]
fn am_figure_pairs_theta_with_modulated_gamma() {
    let fig = am().unwrap();
    let panel = fig.layout.panel(PanelRef::new(0, 0)).unwrap();
    assert_eq!(panel.traces.len(), 2);
    let theta = &panel.traces[0].waveform;
    let gamma = &panel.traces[1].waveform;
    assert_eq!(theta.len(), 500);
    // Cosine theta starts at its peak; modulated gamma at 0.5 · 1.8.
    assert!((theta.samples()[0] - 1.0).abs() < 1e-12);
    assert!((gamma.samples()[0] - 0.9).abs() < 1e-12);
    assert_eq!(gamma.frequency_hz, 40.0);
}
