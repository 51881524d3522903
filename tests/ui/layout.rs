use memocal::constants::{SELECTOR_HEIGHT, STATUS_BAR_HEIGHT};
use memocal::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_main_layout_sections() {
    let area = Rect::new(0, 0, 80, 30);
    let [selector, grid, status] = LayoutManager::main_layout(area);

    assert_eq!(selector.height, SELECTOR_HEIGHT);
    assert_eq!(status.height, STATUS_BAR_HEIGHT);
    assert_eq!(grid.height, 30 - SELECTOR_HEIGHT - STATUS_BAR_HEIGHT);
    assert_eq!(status.y, 29);
}

#[test]
fn test_grid_rows_have_header_line() {
    let rows = LayoutManager::grid_rows(Rect::new(0, 0, 70, 25), 6);
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].height, 1);
    assert_eq!(rows.iter().map(|r| r.height).sum::<u16>(), 25);
}

#[test]
fn test_grid_columns_cover_row() {
    let row = Rect::new(2, 5, 70, 4);
    let columns = LayoutManager::grid_columns(row);

    assert_eq!(columns[0].x, 2);
    assert_eq!(columns.iter().map(|c| c.width).sum::<u16>(), 70);
    assert!(columns.windows(2).all(|w| w[0].x + w[0].width == w[1].x));
}

#[test]
fn test_contains() {
    let area = Rect::new(10, 10, 5, 2);
    assert!(LayoutManager::contains(area, 10, 10));
    assert!(LayoutManager::contains(area, 14, 11));
    assert!(!LayoutManager::contains(area, 15, 10));
    assert!(!LayoutManager::contains(area, 10, 12));
}
