use super::*;

#[test]
fn first_front_tile_sits_at_margin() {
    assert_eq!(front_position(0), TilePosition::new(1.5, 1.5));
    assert_eq!(front_position(4), TilePosition::new(7.5, 7.5));
    assert_eq!(front_position(11), TilePosition::new(13.5, 19.5));
}

#[test]
fn front_position_cycles_every_page() {
    for i in 0..40 {
        assert_eq!(front_cell(i), front_cell(i + TILES_PER_PAGE));
        assert_eq!(front_position(i), front_position(i + TILES_PER_PAGE));
    }
}

#[test]
fn back_columns_are_reversed() {
    assert_eq!(back_cell(0), GridCell { row: 0, col: 2 });
    assert_eq!(back_cell(1), GridCell { row: 0, col: 1 });
    assert_eq!(back_cell(2), GridCell { row: 0, col: 0 });
    assert_eq!(back_cell(3), GridCell { row: 1, col: 2 });
    assert_eq!(back_position(0), TilePosition::new(13.5, 1.5));
}

#[test]
fn back_tile_lies_under_front_tile_when_flipped() {
    // Flipping about the vertical axis maps x to PAGE_WIDTH - x - TILE_SIZE.
    for slot in 0..TILES_PER_PAGE {
        let front = front_position(slot);
        let back = back_position(slot);
        let flipped_x = PAGE_WIDTH_CM - back.x - TILE_SIZE_CM;
        assert!((flipped_x - front.x).abs() < 1e-9, "slot {slot}");
        assert_eq!(front.y, back.y);
    }
}

#[test]
fn grid_fits_inside_page() {
    let last = front_position(TILES_PER_PAGE - 1);
    assert!(last.x + TILE_SIZE_CM <= PAGE_WIDTH_CM);
    assert!(last.y + TILE_SIZE_CM <= PAGE_HEIGHT_CM);
}
