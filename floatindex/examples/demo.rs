use std::fs::File;
use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use simplelog::{Config, LevelFilter, WriteLogger};
use unicode_width::UnicodeWidthStr;

use floatindex::{
    Document, Edges, Event, Extent, FloatIndex, MappedViewport, Node,
};

/// Width of the index column; the body's left border sits on this column.
const INDEX_WIDTH: u16 = 18;
/// Document row where the two columns start.
const TOP: i32 = 2;
/// Rows per index entry: a border line plus the title line.
const INDEX_ROW_HEIGHT: i32 = 2;

struct Section {
    title: &'static str,
    lines: usize,
}

const SECTIONS: &[Section] = &[
    Section { title: "Section I", lines: 6 },
    Section { title: "Section II", lines: 14 },
    Section { title: "Section III", lines: 9 },
    Section { title: "Section IV", lines: 18 },
    Section { title: "Section V", lines: 7 },
];

fn build_document() -> Document {
    let mut index = Node::div().id("index").class("index");
    let mut body = Node::div().id("body").class("body").border(Edges::left(1));
    for (i, _) in SECTIONS.iter().enumerate() {
        index = index.child(
            Node::div()
                .id(format!("idx-{i}"))
                .class("section")
                .border(Edges::top(1)),
        );
        body = body.child(Node::div().id(format!("body-{i}")).class("section"));
    }
    Document::new(
        Node::div()
            .id("main")
            .child(Node::div().id("wrapper").class("index-wrapper").child(index))
            .child(body),
    )
}

/// Document-space extent of the i-th body section. One row for the title,
/// the content lines, one blank row of padding.
fn body_extent(i: usize) -> Extent {
    let mut top = TOP;
    for section in &SECTIONS[..i] {
        top += 1 + section.lines as i32 + 1;
    }
    Extent::new(top, top + 1 + SECTIONS[i].lines as i32 + 1)
}

/// Rebuild the viewport table for the current frame. While the wrapper is
/// pinned, the index rows live at a fixed offset from the viewport top, so
/// their document-space extents follow the scroll offset.
fn rebuild_viewport(vp: &mut MappedViewport, scroll: i32, pinned: bool) {
    vp.set_scroll_y(scroll);
    let wrapper_top = if pinned { scroll } else { TOP };

    let rows = SECTIONS.len() as i32;
    vp.insert(
        "wrapper",
        Extent::new(wrapper_top, wrapper_top + rows * INDEX_ROW_HEIGHT),
    );
    for i in 0..SECTIONS.len() {
        let top = wrapper_top + i as i32 * INDEX_ROW_HEIGHT;
        vp.insert(format!("idx-{i}"), Extent::new(top, top + INDEX_ROW_HEIGHT));
        vp.insert(format!("body-{i}"), body_extent(i));
    }
}

fn document_height() -> i32 {
    body_extent(SECTIONS.len() - 1).bottom + 1
}

fn pad(text: &str, width: usize) -> String {
    let mut out = String::from(text);
    let mut w = UnicodeWidthStr::width(text);
    while w < width {
        out.push(' ');
        w += 1;
    }
    out
}

fn draw(
    stdout: &mut io::Stdout,
    doc: &Document,
    fi: &FloatIndex,
    vp: &MappedViewport,
    scroll: i32,
    height: u16,
) -> io::Result<()> {
    use floatindex::{document_extent, Viewport};

    queue!(stdout, Clear(ClearType::All))?;
    let rows = i32::from(height.saturating_sub(1));

    // Body column: border and text.
    let border_col = INDEX_WIDTH;
    for (i, section) in SECTIONS.iter().enumerate() {
        let extent = body_extent(i);
        for line in 0..extent.height() {
            let screen_y = extent.top + line - scroll;
            if screen_y < 0 || screen_y >= rows {
                continue;
            }
            let text = if line == 0 {
                format!("─ {} {}", section.title, "─".repeat(24))
            } else if (line as usize) <= section.lines {
                format!("lorem ipsum dolor sit amet, line {line}")
            } else {
                String::new()
            };
            queue!(
                stdout,
                cursor::MoveTo(border_col, screen_y as u16),
                Print("│"),
                cursor::MoveTo(border_col + 2, screen_y as u16),
                Print(text)
            )?;
        }
    }

    // Seam patches erase the body border wherever a pair overlaps. Patch
    // geometry is relative to its index row; the cell grid treats the patch
    // as covering [top, top + height].
    let patches = fi.section_floater().patches();
    for (i, patch_id) in patches.iter().enumerate() {
        let Some(patch) = doc.find(patch_id) else {
            continue;
        };
        if !patch.visible {
            continue;
        }
        let (Some(top), Some(patch_height)) = (patch.top, patch.height) else {
            continue;
        };
        let row_top = document_extent(vp, &format!("idx-{i}")).top;
        for dy in 0..=patch_height.max(0) {
            let screen_y = row_top + top + dy - scroll;
            if screen_y >= 0 && screen_y < rows {
                queue!(stdout, cursor::MoveTo(border_col, screen_y as u16), Print(" "))?;
            }
        }
    }

    // Index column on top of everything it owns.
    for (i, section) in SECTIONS.iter().enumerate() {
        let extent = vp.client_extent(&format!("idx-{i}"));
        let border_y = extent.top;
        let title_y = extent.top + 1;
        if border_y >= 0 && border_y < rows {
            queue!(
                stdout,
                cursor::MoveTo(0, border_y as u16),
                Print("─".repeat(INDEX_WIDTH as usize))
            )?;
        }
        if title_y >= 0 && title_y < rows {
            queue!(
                stdout,
                cursor::MoveTo(0, title_y as u16),
                Print(pad(section.title, INDEX_WIDTH as usize))
            )?;
        }
    }

    let status = format!(
        " scroll {scroll:>3}  {}  ↑/↓ PgUp/PgDn Home scroll, q quits",
        if fi.scroll_float().is_floating() {
            "[index pinned]"
        } else {
            "[index in flow]"
        }
    );
    queue!(
        stdout,
        cursor::MoveTo(0, height.saturating_sub(1)),
        Print(status)
    )?;
    stdout.flush()
}

fn main() -> io::Result<()> {
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let mut doc = build_document();
    let mut vp = MappedViewport::new();
    let mut scroll = 0;
    rebuild_viewport(&mut vp, scroll, false);

    let result = (|| -> io::Result<()> {
        let mut fi = FloatIndex::init(&mut doc, &vp, "main")
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        let (_, mut height) = terminal::size()?;

        loop {
            // Release checks deferred from the previous turn, then paint.
            rebuild_viewport(&mut vp, scroll, fi.scroll_float().is_floating());
            fi.run_pending(&mut doc, &vp);
            draw(&mut stdout, &doc, &fi, &vp, scroll, height)?;

            let max_scroll = (document_height() - i32::from(height) + 1).max(0);
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let delta = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Up | KeyCode::Char('k') => -1,
                        KeyCode::Down | KeyCode::Char('j') => 1,
                        KeyCode::PageUp => -10,
                        KeyCode::PageDown => 10,
                        KeyCode::Home => -scroll,
                        _ => 0,
                    };
                    if delta != 0 {
                        scroll = (scroll + delta).clamp(0, max_scroll);
                        rebuild_viewport(&mut vp, scroll, fi.scroll_float().is_floating());
                        fi.handle_event(&mut doc, &vp, Event::Scroll);
                    }
                }
                CrosstermEvent::Resize(_, new_height) => {
                    height = new_height;
                    // The resize handler drops the wrapper back into flow
                    // before re-measuring, so serve flow positions here.
                    rebuild_viewport(&mut vp, scroll, false);
                    fi.handle_event(&mut doc, &vp, Event::Resize);
                }
                _ => {}
            }
        }
        Ok(())
    })();

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
