//! Painter output checks against a recording surface.

use kurbo::Affine;
use peniko::Brush;

use tessera_canvas::{CommandRecorder, PaintCommand};
use tessera_glyphs::GlyphCatalog;
use tessera_paint::{
    CELL_UNITS, PaintError, RenderOptions, base_transform, grid_cells, paint_sentence,
};

fn options() -> RenderOptions {
    RenderOptions {
        columns: 4,
        ..RenderOptions::default()
    }
}

/// Recover (row, col) from a recorded command transform by peeling off the
/// canvas-to-pixel base transform.
fn recovered_cell(base: Affine, transform: Affine) -> (usize, usize) {
    let local = base.inverse() * transform;
    let offset = local.translation();
    (
        (-offset.y / CELL_UNITS).round() as usize,
        (offset.x / CELL_UNITS).round() as usize,
    )
}

#[test]
fn each_glyph_paints_five_fills_five_strokes_and_a_label() {
    let mut recorder = CommandRecorder::new();
    let cells = paint_sentence(
        &mut recorder,
        GlyphCatalog::builtin(),
        "HELLO WORLD",
        &options(),
    )
    .unwrap();

    assert_eq!(cells.len(), 10);
    let commands = recorder.commands();
    assert!(matches!(commands[0], PaintCommand::Reset));
    assert_eq!(commands.len(), 1 + 10 * 11);

    let fills = commands
        .iter()
        .filter(|c| matches!(c, PaintCommand::Fill { .. }))
        .count();
    let strokes = commands
        .iter()
        .filter(|c| matches!(c, PaintCommand::Stroke { .. }))
        .count();
    let labels = commands
        .iter()
        .filter(|c| matches!(c, PaintCommand::Label { .. }))
        .count();
    assert_eq!((fills, strokes, labels), (50, 50, 10));
}

/// Re-reading placements out of the recorded commands reproduces the same
/// (row, col) → key mapping as computing the layout directly.
#[test]
fn recorded_placements_round_trip() {
    let catalog = GlyphCatalog::builtin();
    let options = options();
    let mut recorder = CommandRecorder::new();
    let cells = paint_sentence(&mut recorder, catalog, "HELLO WORLD 123", &options).unwrap();

    let base = base_transform(options.scale);
    let recovered: Vec<(usize, usize, String)> = recorder
        .commands()
        .iter()
        .filter_map(|command| match command {
            PaintCommand::Label {
                text, transform, ..
            } => {
                let (row, col) = recovered_cell(base, *transform);
                Some((row, col, text.clone()))
            }
            _ => None,
        })
        .collect();

    // Letters and digits label themselves, so the recorded labels are the keys.
    let expected: Vec<(usize, usize, String)> = cells
        .iter()
        .map(|cell| (cell.row, cell.col, cell.key.clone()))
        .collect();
    assert_eq!(recovered, expected);

    // And the direct computation agrees with what the painter drew.
    let keys: Vec<String> = cells.iter().map(|cell| cell.key.clone()).collect();
    assert_eq!(grid_cells(&keys, options.columns).unwrap(), cells);
}

#[test]
fn decomposed_marks_get_their_own_cells() {
    let catalog = GlyphCatalog::builtin();
    let options = options();
    let mut recorder = CommandRecorder::new();
    // "Ào" expands to A, grave, O: three cells in row 0.
    let cells = paint_sentence(&mut recorder, catalog, "Ào", &options).unwrap();

    let keys: Vec<&str> = cells.iter().map(|cell| cell.key.as_str()).collect();
    assert_eq!(keys, ["A", "grave", "O"]);
    assert_eq!((cells[1].row, cells[1].col), (0, 1));

    // The grave mark's first polygon fill uses its own color sequence.
    let fills: Vec<&PaintCommand> = recorder
        .commands()
        .iter()
        .filter(|c| matches!(c, PaintCommand::Fill { .. }))
        .collect();
    assert_eq!(fills.len(), 15);
    let PaintCommand::Fill { brush, .. } = fills[5] else {
        unreachable!()
    };
    let Brush::Solid(color) = brush else {
        panic!("expected solid fill, got {brush:?}")
    };
    let expected = catalog.glyph("grave").unwrap().fill_color(0).to_rgba8();
    let actual = color.to_rgba8();
    assert_eq!(
        (actual.r, actual.g, actual.b, actual.a),
        (expected.r, expected.g, expected.b, expected.a)
    );
}

#[test]
fn labels_can_be_disabled() {
    let mut recorder = CommandRecorder::new();
    let options = RenderOptions {
        show_labels: false,
        ..options()
    };
    paint_sentence(&mut recorder, GlyphCatalog::builtin(), "ABC", &options).unwrap();

    assert!(
        recorder
            .commands()
            .iter()
            .all(|c| !matches!(c, PaintCommand::Label { .. }))
    );
}

#[test]
fn empty_input_paints_nothing_but_resets() {
    let mut recorder = CommandRecorder::new();
    let cells =
        paint_sentence(&mut recorder, GlyphCatalog::builtin(), "", &options()).unwrap();
    assert!(cells.is_empty());
    assert_eq!(recorder.commands().len(), 1);
}

#[test]
fn unknown_character_aborts_the_whole_render() {
    let mut recorder = CommandRecorder::new();
    let err = paint_sentence(&mut recorder, GlyphCatalog::builtin(), "A✓", &options()).unwrap_err();
    assert!(matches!(err, PaintError::Glyph(_)));
    // Expansion fails before any command is pushed.
    assert!(recorder.commands().is_empty());
}

#[test]
fn zero_columns_is_an_invalid_layout() {
    let mut recorder = CommandRecorder::new();
    let options = RenderOptions {
        columns: 0,
        ..RenderOptions::default()
    };
    let err = paint_sentence(&mut recorder, GlyphCatalog::builtin(), "A", &options).unwrap_err();
    assert!(matches!(err, PaintError::InvalidLayout { columns: 0 }));
}
