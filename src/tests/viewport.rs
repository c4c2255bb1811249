use super::{ScrollAnimation, ScrollViewport};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_progress_at_top_is_zero() {
    let vp = ScrollViewport::new(20, 100, 0);
    assert!(approx(vp.progress(), 0.0));
}

#[test]
fn test_progress_at_bottom_is_one() {
    let mut vp = ScrollViewport::new(20, 100, 0);
    vp.scroll_to(1_000.0);
    assert!(approx(vp.offset, 80.0), "offset should clamp to max");
    assert!(approx(vp.progress(), 1.0));
}

#[test]
fn test_short_page_never_scrolls() {
    let mut vp = ScrollViewport::new(40, 30, 0);
    vp.scroll_by(10.0);
    assert!(approx(vp.offset, 0.0));
    assert!(approx(vp.progress(), 0.0), "non-scrollable page reports 0");
}

#[test]
fn test_scroll_clamps_at_top() {
    let mut vp = ScrollViewport::new(20, 100, 0);
    vp.scroll_by(-5.0);
    assert!(approx(vp.offset, 0.0));
}

#[test]
fn test_intersection_ratio_is_fraction_of_band() {
    let vp = ScrollViewport::new(20, 100, 0);
    assert!(approx(vp.intersection_ratio(0, 10), 1.0));
    assert!(approx(vp.intersection_ratio(10, 30), 0.5));
    assert!(approx(vp.intersection_ratio(40, 60), 0.0));
}

#[test]
fn test_margin_expands_detection_window() {
    let vp = ScrollViewport::new(20, 100, 5);
    // Window becomes [-5, 25): five rows of the band starting at 20 overlap.
    assert!(approx(vp.intersection_ratio(20, 30), 0.5));
}

#[test]
fn test_empty_band_has_zero_ratio() {
    let vp = ScrollViewport::new(20, 100, 0);
    assert!(approx(vp.intersection_ratio(5, 5), 0.0));
}

#[test]
fn test_resize_reclamps_offset() {
    let mut vp = ScrollViewport::new(20, 100, 0);
    vp.scroll_to(80.0);
    vp.resize(50);
    assert!(approx(vp.offset, 50.0), "offset should re-clamp to new max");
}

#[test]
fn test_animation_lands_on_target() {
    let mut anim = ScrollAnimation::new(0.0, 80.0, ScrollAnimation::DEFAULT_TICKS);
    let mut last = 0.0;
    while !anim.finished() {
        let next = anim.step();
        assert!(next >= last, "ease-out should never move backwards");
        last = next;
    }
    assert!(approx(last, 80.0));
}

#[test]
fn test_animation_single_tick_jumps() {
    let mut anim = ScrollAnimation::new(10.0, 40.0, 1);
    assert!(approx(anim.step(), 40.0));
    assert!(anim.finished());
}
