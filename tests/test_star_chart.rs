//! Star Chart Tests
//!
//! Integration tests for rasterizing star records:
//! - Collisions keep the later star
//! - Any grid size is accepted, including degenerate ones
//! - Rendered charts keep their dimensions

use starmap::formats::render_chart;
use starmap::{rasterize, Glyph, StarForge, Theme};

#[test]
fn test_collision_keeps_later_star() {
    let forge = StarForge::default();
    let records = forge.forge_all(&["aa27", "constellation44"]).unwrap();

    let grid = rasterize(&records, 60, 20);
    assert_eq!(grid.cell_for(&records[0].coordinate), Some((18, 15)));
    assert_eq!(grid.cell_for(&records[1].coordinate), Some((18, 15)));
    assert_eq!(grid.get(18, 15), Some(Glyph::VeryBright));
    assert_eq!(grid.overwrites(), 1);
    assert_eq!(grid.occupied(), 1);

    let reversed: Vec<_> = records.iter().rev().cloned().collect();
    let grid = rasterize(&reversed, 60, 20);
    assert_eq!(grid.get(18, 15), Some(Glyph::Medium));
}

#[test]
fn test_any_grid_size_is_accepted() {
    let records = StarForge::default()
        .forge_all(&["sun", "moon", "comet", "nebula", "quasar"])
        .unwrap();

    for (width, height) in [(0, 0), (0, 5), (5, 0), (1, 1), (2, 2), (3, 7), (60, 20), (200, 80)] {
        let grid = rasterize(&records, width, height);
        assert_eq!(grid.width(), width);
        assert_eq!(grid.height(), height);
        assert!(grid.occupied() <= records.len());
        let placed = if width == 0 || height == 0 { 0 } else { records.len() };
        assert_eq!(grid.occupied() + grid.overwrites(), placed);
    }
}

#[test]
fn test_empty_record_list_gives_blank_grid() {
    let grid = rasterize(&[], 60, 20);
    assert_eq!(grid.occupied(), 0);

    let text = render_chart(&grid, Theme::Plain).unwrap();
    for row in text.lines().filter(|l| l.contains('|')) {
        let inner = row.split('|').nth(1).unwrap();
        assert!(inner.chars().all(|c| c == ' '));
    }
}

#[test]
fn test_rendered_chart_matches_grid_size() {
    let records = StarForge::default().forge_all(&["hello", "world"]).unwrap();
    let grid = rasterize(&records, 40, 12);
    let text = render_chart(&grid, Theme::Plain).unwrap();

    let rows: Vec<&str> = text.lines().filter(|l| l.contains('|')).collect();
    assert_eq!(rows.len(), 12);
    for row in &rows {
        let inner = row.split('|').nth(1).unwrap();
        assert_eq!(inner.chars().count(), 40);
    }

    // "hello" is medium (2.1)
    assert_eq!(grid.cell_for(&records[0].coordinate), Some((2, 6)));
    assert_eq!(grid.get(2, 6), Some(Glyph::Medium));
    assert_eq!(grid.cell_for(&records[1].coordinate), Some((6, 6)));
}

#[test]
fn test_huge_dimensions_do_not_panic() {
    let grid = rasterize(&[], usize::MAX, 2);
    assert_eq!((grid.width(), grid.height()), (usize::MAX, 2));
    assert_eq!(grid.occupied(), 0);

    let records = StarForge::default()
        .forge_all(&["aa27", "constellation44", "hello"])
        .unwrap();
    let grid = rasterize(&records, usize::MAX, usize::MAX);
    assert_eq!(grid.occupied() + grid.overwrites(), records.len());
    for record in &records {
        let (column, row) = grid.cell_for(&record.coordinate).unwrap();
        assert!(column <= usize::MAX - 2);
        assert!(row <= usize::MAX - 2);
    }
}
