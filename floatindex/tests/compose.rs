use floatindex::{
    Document, Edges, Error, Event, Extent, FloatIndex, MappedViewport, Node, Position,
    FLOATING_CLASS,
};

/// Full fixture: index wrapper, two index rows, two body sections.
fn full_doc() -> Document {
    Document::new(
        Node::div()
            .id("main")
            .child(
                Node::div().id("wrapper").class("index-wrapper").child(
                    Node::div()
                        .id("index")
                        .class("index")
                        .child(Node::div().id("idx-0").class("section").border(Edges::top(1)))
                        .child(Node::div().id("idx-1").class("section").border(Edges::top(1))),
                ),
            )
            .child(
                Node::div()
                    .id("body")
                    .class("body")
                    .border(Edges::left(1))
                    .child(Node::div().id("body-0").class("section"))
                    .child(Node::div().id("body-1").class("section")),
            ),
    )
}

fn full_viewport() -> MappedViewport {
    let mut vp = MappedViewport::new();
    vp.insert("wrapper", Extent::new(20, 80));
    vp.insert("idx-0", Extent::new(20, 50));
    vp.insert("idx-1", Extent::new(50, 80));
    vp.insert("body-0", Extent::new(20, 300));
    vp.insert("body-1", Extent::new(300, 600));
    vp
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_init_wires_both_behaviors() {
    let mut doc = full_doc();
    let vp = full_viewport();

    let fi = FloatIndex::init(&mut doc, &vp, "main").expect("valid markup");

    assert_eq!(fi.scroll_float().target(), "wrapper");
    assert_eq!(fi.scroll_float().anchor(), 20);
    assert!(!fi.scroll_float().is_floating());
    assert_eq!(fi.section_floater().pair_count(), 2);
    assert!(fi.section_floater().has_pending(), "initial check deferred");
}

#[test]
fn test_init_missing_wrapper() {
    let mut doc = Document::new(Node::div().id("main"));
    let vp = MappedViewport::new();
    assert_eq!(
        FloatIndex::init(&mut doc, &vp, "main").err(),
        Some(Error::MissingElement("index-wrapper"))
    );
}

#[test]
fn test_init_failure_leaves_document_untouched() {
    // One body section removed: counts mismatch.
    let mut doc = full_doc();
    doc.find_mut("body").unwrap().children.pop();

    // Scrolled well past the anchor, so a careless init order would pin the
    // wrapper before the section validation fires.
    let mut vp = full_viewport();
    vp.set_scroll_y(500);

    let err = FloatIndex::init(&mut doc, &vp, "main").err();
    assert_eq!(err, Some(Error::SectionCountMismatch { index: 2, body: 1 }));

    let wrapper = doc.find("wrapper").unwrap();
    assert_eq!(wrapper.position, Position::Static, "wrapper never floated");
    assert!(!wrapper.has_class(FLOATING_CLASS));
    assert!(doc.find("idx-0").unwrap().children.is_empty());
    assert!(doc.find("idx-1").unwrap().children.is_empty());
}

// ============================================================================
// Event dispatch
// ============================================================================

#[test]
fn test_scroll_event_reaches_both_behaviors() {
    let mut doc = full_doc();
    let mut vp = full_viewport();

    let mut fi = FloatIndex::init(&mut doc, &vp, "main").unwrap();
    fi.run_pending(&mut doc, &vp);
    assert!(!fi.section_floater().has_pending());

    vp.set_scroll_y(100);
    fi.handle_event(&mut doc, &vp, Event::Scroll);

    assert!(fi.scroll_float().is_floating(), "float rechecks synchronously");
    assert!(
        fi.section_floater().has_pending(),
        "sections only mark a deferred recheck"
    );

    fi.run_pending(&mut doc, &vp);
    assert!(!fi.section_floater().has_pending());
}

#[test]
fn test_resize_event_reanchors_and_reschedules() {
    let mut doc = full_doc();
    let mut vp = full_viewport();

    let mut fi = FloatIndex::init(&mut doc, &vp, "main").unwrap();
    fi.run_pending(&mut doc, &vp);

    vp.insert("wrapper", Extent::new(35, 95));
    fi.handle_event(&mut doc, &vp, Event::Resize);

    assert_eq!(fi.scroll_float().anchor(), 35);
    assert!(fi.section_floater().has_pending());
}

#[test]
fn test_full_scroll_cycle() {
    let mut doc = full_doc();
    let mut vp = full_viewport();

    let mut fi = FloatIndex::init(&mut doc, &vp, "main").unwrap();
    fi.run_pending(&mut doc, &vp);

    // At rest, the first pair overlaps and the second does not.
    let patches: Vec<String> = fi.section_floater().patches().to_vec();
    assert!(doc.find(&patches[0]).unwrap().visible);
    assert!(!doc.find(&patches[1]).unwrap().visible);

    // Scroll past the anchor: wrapper pins, seams recheck.
    vp.set_scroll_y(60);
    fi.handle_event(&mut doc, &vp, Event::Scroll);
    fi.run_pending(&mut doc, &vp);
    assert!(fi.scroll_float().is_floating());

    // Back to the top: wrapper restored, still exactly one visible seam.
    vp.set_scroll_y(0);
    fi.handle_event(&mut doc, &vp, Event::Scroll);
    fi.run_pending(&mut doc, &vp);
    assert!(!fi.scroll_float().is_floating());
    assert_eq!(doc.find("wrapper").unwrap().position, Position::Static);
    assert!(doc.find(&patches[0]).unwrap().visible);
    assert!(!doc.find(&patches[1]).unwrap().visible);
}
