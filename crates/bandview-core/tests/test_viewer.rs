mod common;

use approx::assert_relative_eq;

use bandview_core::composite::Composite;
use bandview_core::config::ViewerConfig;
use bandview_core::error::BandviewError;
use bandview_core::input::{MouseButton, ScrollDirection, ViewerInput};
use bandview_core::surface::DragMode;
use bandview_core::viewer::Viewer;

use common::{make_raster, make_viewer, RecordingSurface, SurfaceCall};

// ---------------------------------------------------------------------------
// Initialization
// ---------------------------------------------------------------------------

#[test]
fn test_initial_selection_five_bands() {
    let viewer = make_viewer(4, 4, 5);
    assert_eq!(viewer.view().selection.bands(), &[0, 1, 2]);
}

#[test]
fn test_initial_selection_two_bands() {
    let viewer = make_viewer(4, 4, 2);
    assert_eq!(viewer.view().selection.bands(), &[0, 1]);
}

#[test]
fn test_initial_selection_one_band() {
    let viewer = make_viewer(4, 4, 1);
    assert_eq!(viewer.view().selection.bands(), &[0]);
}

#[test]
fn test_initialize_renders_composite_and_full_extent() {
    let viewer = make_viewer(20, 30, 4);
    let surface = viewer.surface();

    assert_eq!(surface.title.as_deref(), Some("Raster Viewer"));
    assert_eq!(surface.composite.as_ref().map(Composite::channels), Some(3));

    let extent = surface.extent.expect("extent set");
    assert_relative_eq!(extent.x0, 0.0);
    assert_relative_eq!(extent.y0, 0.0);
    assert_relative_eq!(extent.x1, 30.0);
    assert_relative_eq!(extent.y1, 20.0);
    assert!(surface.pending_redraw);
    assert_relative_eq!(viewer.view().zoom, 1.0);
}

#[test]
fn test_initialize_single_band_renders_gray() {
    let viewer = make_viewer(5, 5, 1);
    assert!(matches!(
        viewer.surface().composite,
        Some(Composite::Gray(_))
    ));
}

#[test]
fn test_initialize_rejects_bad_config() {
    let mut config = ViewerConfig::default();
    config.zoom.min = 0.0;
    let result = Viewer::new(make_raster(2, 2, 1), RecordingSurface::default(), &config);
    assert!(matches!(result, Err(BandviewError::Config(_))));
}

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_changed_sets_extent_from_origin() {
    let mut viewer = make_viewer(100, 200, 3);
    for v in [1.0, 2.0, 2.5, 4.0, 7.3, 10.0] {
        viewer.on_zoom_changed(v);
        let extent = viewer.surface().extent.unwrap();
        assert_relative_eq!(extent.x0, 0.0);
        assert_relative_eq!(extent.y0, 0.0);
        assert_relative_eq!(extent.width(), 200.0 / v, epsilon = 1e-9);
        assert_relative_eq!(extent.height(), 100.0 / v, epsilon = 1e-9);
        assert_relative_eq!(viewer.view().zoom, v);
    }
}

#[test]
fn test_zoom_changed_requests_redraw() {
    let mut viewer = make_viewer(10, 10, 3);
    viewer.surface_mut().clear();
    viewer.on_zoom_changed(3.0);
    let surface = viewer.surface();
    assert!(surface.pending_redraw);
    assert_eq!(surface.count(|c| matches!(c, SurfaceCall::Extent(_))), 1);
}

#[test]
fn test_zoom_changed_clamps_to_slider_range() {
    let mut viewer = make_viewer(10, 10, 3);
    viewer.on_zoom_changed(50.0);
    assert_relative_eq!(viewer.view().zoom, 10.0);
    viewer.on_zoom_changed(0.1);
    assert_relative_eq!(viewer.view().zoom, 1.0);
}

#[test]
fn test_non_finite_zoom_is_ignored() {
    let mut viewer = make_viewer(10, 10, 3);
    viewer.on_zoom_changed(2.0);
    viewer.surface_mut().clear();

    viewer.on_zoom_changed(f64::NAN);
    viewer.on_zoom_changed(f64::INFINITY);
    assert_relative_eq!(viewer.view().zoom, 2.0);
    assert_relative_eq!(viewer.zoom_control().value(), 2.0);
    assert!(viewer.surface().calls.is_empty());

    viewer.on_scroll(ScrollDirection::Up);
    assert_relative_eq!(viewer.view().zoom, 3.0);
    let extent = viewer.surface().extent.unwrap();
    assert!(extent.x1.is_finite() && extent.y1.is_finite());
    assert_relative_eq!(extent.x1, 10.0 / 3.0);
}

#[test]
fn test_scroll_up_increments_by_one() {
    let mut viewer = make_viewer(40, 40, 3);
    viewer.on_scroll(ScrollDirection::Up);
    assert_relative_eq!(viewer.view().zoom, 2.0);
    assert_relative_eq!(viewer.zoom_control().value(), 2.0);
    assert_relative_eq!(viewer.surface().extent.unwrap().x1, 20.0);
}

#[test]
fn test_scroll_down_decrements_by_one() {
    let mut viewer = make_viewer(40, 40, 3);
    viewer.on_zoom_changed(5.5);
    viewer.on_scroll(ScrollDirection::Down);
    assert_relative_eq!(viewer.view().zoom, 4.5);
}

#[test]
fn test_scroll_caps_at_ten() {
    let mut viewer = make_viewer(10, 10, 3);
    for _ in 0..15 {
        viewer.on_scroll(ScrollDirection::Up);
    }
    assert_relative_eq!(viewer.view().zoom, 10.0);

    viewer.on_zoom_changed(9.5);
    viewer.on_scroll(ScrollDirection::Up);
    assert_relative_eq!(viewer.view().zoom, 10.0);
}

#[test]
fn test_scroll_floors_at_one_without_redraw() {
    let mut viewer = make_viewer(10, 10, 3);
    viewer.surface_mut().clear();
    viewer.on_scroll(ScrollDirection::Down);
    assert_relative_eq!(viewer.view().zoom, 1.0);
    // Value did not change, so no change notification fired.
    assert!(viewer.surface().calls.is_empty());
}

#[test]
fn test_scroll_step_from_config() {
    let mut config = ViewerConfig::default();
    config.zoom.step = 0.5;
    let mut viewer =
        Viewer::new(make_raster(8, 8, 3), RecordingSurface::default(), &config).unwrap();
    viewer.on_scroll(ScrollDirection::Up);
    assert_relative_eq!(viewer.view().zoom, 1.5);
}

// ---------------------------------------------------------------------------
// Click
// ---------------------------------------------------------------------------

#[test]
fn test_secondary_click_toggles_zoom_mode() {
    let mut viewer = make_viewer(10, 10, 3);
    viewer.on_click(MouseButton::Secondary);
    assert_eq!(viewer.surface().drag_mode, Some(DragMode::Zoom));
    viewer.on_click(MouseButton::Secondary);
    assert_eq!(viewer.surface().drag_mode, None);
}

#[test]
fn test_tertiary_click_switches_to_pan_mode() {
    let mut viewer = make_viewer(10, 10, 3);
    viewer.on_click(MouseButton::Secondary);
    viewer.on_click(MouseButton::Tertiary);
    assert_eq!(viewer.surface().drag_mode, Some(DragMode::Pan));
}

#[test]
fn test_primary_click_is_ignored() {
    let mut viewer = make_viewer(10, 10, 3);
    viewer.surface_mut().clear();
    viewer.on_click(MouseButton::Primary);
    viewer.on_click(MouseButton::Other);
    assert!(viewer.surface().calls.is_empty());
    assert_eq!(viewer.surface().drag_mode, None);
}

// ---------------------------------------------------------------------------
// Band selection
// ---------------------------------------------------------------------------

#[test]
fn test_band_selection_recomposes() {
    let mut viewer = make_viewer(3, 3, 5);
    viewer.surface_mut().clear();
    viewer.on_band_selection_changed("4,3,2").unwrap();

    assert_eq!(viewer.view().selection.bands(), &[4, 3, 2]);
    let Some(Composite::Stacked(data)) = &viewer.surface().composite else {
        panic!("expected stacked composite");
    };
    assert_eq!(data[[0, 0, 0]], 4000.0);
    assert_eq!(data[[0, 0, 2]], 2000.0);
    assert!(viewer.surface().pending_redraw);
}

#[test]
fn test_single_band_selection_on_multiband_raster_renders() {
    let mut viewer = make_viewer(3, 3, 3);
    viewer.on_band_selection_changed("1").unwrap();
    assert_eq!(
        viewer.surface().composite.as_ref().map(Composite::channels),
        Some(1)
    );
    assert_eq!(viewer.band_selector().active_label(), Some("1"));
}

#[test]
fn test_selector_tracks_canonical_label() {
    let mut viewer = make_viewer(3, 3, 4);
    viewer.on_band_selection_changed("2").unwrap();
    viewer.on_band_selection_changed(" 0, 1 ,2").unwrap();
    assert_eq!(viewer.band_selector().active_label(), Some("0,1,2"));
}

#[test]
fn test_out_of_range_selection_keeps_previous_state() {
    let mut viewer = make_viewer(3, 3, 3);
    viewer.on_band_selection_changed("2").unwrap();
    viewer.surface_mut().clear();

    let err = viewer.on_band_selection_changed("7").unwrap_err();
    assert!(matches!(
        err,
        BandviewError::BandOutOfRange {
            band: 7,
            band_count: 3
        }
    ));
    assert_eq!(viewer.view().selection.bands(), &[2]);
    assert_eq!(viewer.band_selector().active_label(), Some("2"));
    assert!(viewer.surface().calls.is_empty());
}

#[test]
fn test_unparsable_selection_keeps_previous_state() {
    let mut viewer = make_viewer(3, 3, 3);
    viewer.on_band_selection_changed("0").unwrap();
    viewer.surface_mut().clear();

    let err = viewer.on_band_selection_changed("x").unwrap_err();
    assert!(matches!(err, BandviewError::InvalidBandLabel(_)));
    assert_eq!(viewer.view().selection.bands(), &[0]);
    assert_eq!(viewer.band_selector().active_label(), Some("0"));
    assert!(viewer.surface().calls.is_empty());
    assert_eq!(viewer.current_composite().unwrap().channels(), 1);
}

#[test]
fn test_oversized_selection_keeps_previous_state() {
    let mut viewer = make_viewer(3, 3, 3);
    viewer.on_band_selection_changed("2,1,0").unwrap();
    viewer.on_band_selection_changed("1").unwrap();
    viewer.surface_mut().clear();

    let err = viewer.on_band_selection_changed("0,1,2,0").unwrap_err();
    assert!(matches!(
        err,
        BandviewError::TooManyBands { count: 4, max: 3 }
    ));
    assert_eq!(viewer.view().selection.bands(), &[1]);
    assert_eq!(viewer.band_selector().active_label(), Some("1"));
    assert!(viewer.surface().calls.is_empty());
    assert!(matches!(
        viewer.surface().composite,
        Some(Composite::Gray(_))
    ));
}

#[test]
fn test_single_band_raster_ignores_selection_content() {
    let mut viewer = make_viewer(3, 3, 1);
    viewer.on_band_selection_changed("0").unwrap();
    assert!(matches!(
        viewer.surface().composite,
        Some(Composite::Gray(_))
    ));
}

#[test]
fn test_selection_does_not_touch_zoom() {
    let mut viewer = make_viewer(10, 10, 3);
    viewer.on_zoom_changed(4.0);
    viewer.on_band_selection_changed("2,1,0").unwrap();
    assert_relative_eq!(viewer.view().zoom, 4.0);
    assert_relative_eq!(viewer.visible_extent().x1, 2.5);
}

// ---------------------------------------------------------------------------
// Undefined operations
// ---------------------------------------------------------------------------

#[test]
fn test_math_operation_is_unsupported() {
    let mut viewer = make_viewer(4, 4, 3);
    let err = viewer.apply_math_operation(f32::sqrt).unwrap_err();
    assert!(matches!(
        err,
        BandviewError::Unsupported {
            operation: "apply_math_operation"
        }
    ));
}

#[test]
fn test_filter_is_unsupported() {
    let mut viewer = make_viewer(4, 4, 3);
    let err = viewer.apply_filter(|band| band.to_owned()).unwrap_err();
    assert!(matches!(
        err,
        BandviewError::Unsupported {
            operation: "apply_filter"
        }
    ));
}

#[test]
fn test_statistics_is_unsupported() {
    let viewer = make_viewer(4, 4, 3);
    let err = viewer.calculate_statistics().unwrap_err();
    assert!(matches!(
        err,
        BandviewError::Unsupported {
            operation: "calculate_statistics"
        }
    ));
}

#[test]
fn test_unsupported_operations_leave_view_untouched() {
    let mut viewer = make_viewer(4, 4, 3);
    viewer.surface_mut().clear();
    let _ = viewer.apply_math_operation(|v| v * 2.0);
    let _ = viewer.calculate_statistics();
    assert!(viewer.surface().calls.is_empty());
    assert_eq!(viewer.current_composite().unwrap().channels(), 3);
}
