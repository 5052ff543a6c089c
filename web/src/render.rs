use crate::theme::{Palette, cell_label};
use canvasweeper_core::{CanvasGeometry, Game};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const LABEL_FONT: &str = "12px Arial";
/// Pushes the label down so it sits visually centered in the cell.
const LABEL_BASELINE_OFFSET: f64 = 4.0;

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(context)) => match context.dyn_into::<CanvasRenderingContext2d>() {
            Ok(context) => Some(context),
            Err(err) => {
                log::error!("unexpected 2d context type: {:?}", err);
                None
            }
        },
        Ok(None) => {
            log::error!("canvas has no 2d context");
            None
        }
        Err(err) => {
            log::error!("failed to get 2d context: {:?}", err);
            None
        }
    }
}

/// Redraws the whole board: background, then every cell with its border and label.
pub(crate) fn draw_game(
    ctx: &CanvasRenderingContext2d,
    game: &Game,
    geometry: &CanvasGeometry,
    palette: &Palette,
) -> Result<(), JsValue> {
    let (width, height) = geometry.canvas_size();
    ctx.set_fill_style_str(palette.background);
    ctx.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));

    ctx.set_stroke_style_str(palette.border);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");

    let (cols, rows) = game.size();
    let cell_size = geometry.cell_size;
    for y in 0..rows {
        for x in 0..cols {
            let coords = (x, y);
            let cell = game.cell_view(coords);
            let (left, top) = geometry.cell_origin(coords);

            ctx.set_fill_style_str(palette.cell_fill(cell));
            ctx.fill_rect(left, top, cell_size, cell_size);
            ctx.stroke_rect(left, top, cell_size, cell_size);

            if let Some(label) = cell_label(cell) {
                let (center_x, center_y) = geometry.cell_center(coords);
                ctx.set_fill_style_str(palette.text);
                ctx.fill_text(&label, center_x, center_y + LABEL_BASELINE_OFFSET)?;
            }
        }
    }

    Ok(())
}
