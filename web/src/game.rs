use crate::render;
use crate::theme::Palette;
use canvasweeper_core::{
    self as game, CanvasGeometry, ClickOutcome, Coord2, GameStatus, Session,
};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(Option<Coord2>),
    ToggleFlag(Option<Coord2>),
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::GameConfig,
    pub seed: u64,
    pub palette: Palette,
}

const fn status_class(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "in-progress",
        GameStatus::Won => "win",
        GameStatus::Lost => "lose",
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: Session,
    geometry: CanvasGeometry,
    canvas: NodeRef,
}

impl GameView {
    /// Grid cell under the pointer, `None` when it falls outside the board.
    fn pointer_cell(canvas: &NodeRef, geometry: &CanvasGeometry, e: &MouseEvent) -> Option<Coord2> {
        let canvas = canvas.cast::<HtmlCanvasElement>()?;
        let rect = canvas.get_bounding_client_rect();
        geometry.cell_at(
            f64::from(e.client_x()) - rect.left(),
            f64::from(e.client_y()) - rect.top(),
        )
    }

    fn draw(&self, palette: &Palette) {
        let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() else {
            log::error!("canvas is not mounted");
            return;
        };
        let Some(ctx) = render::context_2d(&canvas) else {
            return;
        };
        if let Err(err) = render::draw_game(&ctx, self.session.game(), &self.geometry, palette) {
            log::error!("failed to draw board: {:?}", err);
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed, .. } = *ctx.props();
        Self {
            session: Session::new(config, seed),
            geometry: CanvasGeometry::new(config.size, CanvasGeometry::DEFAULT_CELL_SIZE),
            canvas: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let outcome = match msg {
            Reveal(coords) => {
                log::debug!("reveal cell: {:?}", coords);
                self.session.primary_click(coords)
            }
            ToggleFlag(coords) => {
                log::debug!("mark cell: {:?}", coords);
                self.session.secondary_click(coords)
            }
        };

        if outcome == ClickOutcome::NewGame {
            log::info!("starting game #{}", self.session.games_started());
        }
        outcome.has_update()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (width, height) = self.geometry.canvas_size();
        let class = classes!("board", status_class(self.session.game().status()));

        let onclick = {
            let canvas = self.canvas.clone();
            let geometry = self.geometry;
            ctx.link().callback(move |e: MouseEvent| {
                Msg::Reveal(Self::pointer_cell(&canvas, &geometry, &e))
            })
        };

        let oncontextmenu = {
            let canvas = self.canvas.clone();
            let geometry = self.geometry;
            ctx.link().callback(move |e: MouseEvent| {
                e.prevent_default();
                Msg::ToggleFlag(Self::pointer_cell(&canvas, &geometry, &e))
            })
        };

        html! {
            <canvas
                ref={self.canvas.clone()}
                {class}
                width={width.to_string()}
                height={height.to_string()}
                {onclick}
                {oncontextmenu}
            />
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&ctx.props().palette);
    }
}
