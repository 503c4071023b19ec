use floatindex::{document_extent, Extent, MappedViewport, Viewport};

// ============================================================================
// Extent math
// ============================================================================

#[test]
fn test_extent_height() {
    assert_eq!(Extent::new(100, 250).height(), 150);
    assert_eq!(Extent::new(5, 5).height(), 0);
}

#[test]
fn test_overlap_partial() {
    let index = Extent::new(100, 200);
    let body = Extent::new(150, 300);
    assert!(index.overlaps(&body));
    assert!(body.overlaps(&index));
}

#[test]
fn test_overlap_contained() {
    let outer = Extent::new(0, 500);
    let inner = Extent::new(100, 200);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn test_no_overlap_disjoint() {
    let index = Extent::new(100, 200);
    let body = Extent::new(250, 300);
    assert!(!index.overlaps(&body));
    assert!(!body.overlaps(&index));
}

#[test]
fn test_no_overlap_touching_edges() {
    // Shared boundary is not an overlap: the test is strict on both sides.
    let upper = Extent::new(100, 200);
    let lower = Extent::new(200, 300);
    assert!(!upper.overlaps(&lower));
    assert!(!lower.overlaps(&upper));
}

#[test]
fn test_shifted() {
    assert_eq!(Extent::new(10, 20).shifted(5), Extent::new(15, 25));
    assert_eq!(Extent::new(10, 20).shifted(-15), Extent::new(-5, 5));
}

// ============================================================================
// Viewport conversion
// ============================================================================

#[test]
fn test_document_extent_invariant_under_scroll() {
    let mut vp = MappedViewport::new();
    vp.insert("row", Extent::new(120, 180));

    assert_eq!(document_extent(&vp, "row"), Extent::new(120, 180));

    // Scrolling moves the client extent but not the document extent.
    vp.set_scroll_y(100);
    assert_eq!(vp.client_extent("row"), Extent::new(20, 80));
    assert_eq!(document_extent(&vp, "row"), Extent::new(120, 180));
}

#[test]
fn test_unknown_id_resolves_to_empty_extent() {
    let mut vp = MappedViewport::new();
    vp.set_scroll_y(40);
    assert_eq!(vp.client_extent("nope"), Extent::new(-40, -40));
    assert_eq!(document_extent(&vp, "nope"), Extent::new(0, 0));
}
