use crate::utils::Modal;
use chabon_core::{Color, Command, Features, Overlay, Row, Session, Tile, TileId};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Drag payload format, the dragged tile id as decimal text.
const TILE_MIME: &str = "text/plain";

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    tile: Tile,
    #[prop_or_default]
    dragging: bool,
    callback: Callback<Command>,
}

#[function_component(TileView)]
fn tile_view(props: &TileProps) -> Html {
    let TileProps {
        tile,
        dragging,
        callback,
    } = props.clone();
    let id = tile.id();

    let ondragstart = {
        let callback = callback.clone();
        Callback::from(move |e: DragEvent| {
            if let Some(transfer) = e.data_transfer() {
                if let Err(err) = transfer.set_data(TILE_MIME, &id.to_string()) {
                    log::error!("failed to set drag data: {:?}", err);
                }
            }
            log::trace!("tile {} drag start", id);
            callback.emit(Command::BeginDrag(id));
        })
    };

    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

    let ondrop = {
        let callback = callback.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let source = e
                .data_transfer()
                .and_then(|transfer| transfer.get_data(TILE_MIME).ok())
                .and_then(|data| data.parse::<TileId>().ok());
            log::trace!("tile {:?} dropped on {}", source, id);
            callback.emit(match source {
                Some(source) => Command::CompleteDrop { source, target: id },
                None => Command::CancelDrag,
            });
        })
    };

    let ondragend = Callback::from(move |_: DragEvent| callback.emit(Command::CancelDrag));

    html! {
        <div
            class={classes!("tile", dragging.then_some("dragging"))}
            draggable="true"
            {ondragstart}
            {ondragover}
            {ondrop}
            {ondragend}
        >
            { tile.text() }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct RowProps {
    row: Row,
    excluded: bool,
    features: Features,
    dragging: Option<TileId>,
    callback: Callback<Command>,
}

#[function_component(RowView)]
fn row_view(props: &RowProps) -> Html {
    let RowProps {
        row,
        excluded,
        features,
        dragging,
        callback,
    } = props.clone();
    let id = row.id();

    let ondblclick = {
        let callback = callback.clone();
        features
            .contains(Features::LOCKING)
            .then(|| Callback::from(move |_: MouseEvent| callback.emit(Command::OpenLock(id))))
    };

    if let Some(lock) = row.lock() {
        let style = format!("background-color: {}", lock.color);
        return html! {
            <div class="locked-row" {style} {ondblclick}>
                <h3>{ lock.theme.clone() }</h3>
                <div class="word-list">{ row.to_text() }</div>
            </div>
        };
    }

    let row_tools = features.contains(Features::NOTES).then(|| {
        let onchange = {
            let callback = callback.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                callback.emit(Command::SetExcluded {
                    row: id,
                    excluded: input.checked(),
                });
            })
        };
        let oninput = {
            let callback = callback.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                callback.emit(Command::SetNotes {
                    row: id,
                    notes: input.value(),
                });
            })
        };
        html! {
            <>
                <input type="checkbox" title="Exclude from shuffle" checked={excluded} {onchange}/>
                <input type="text" placeholder="Notes" value={row.notes().to_string()} {oninput}/>
            </>
        }
    });

    html! {
        <div class={classes!("row", excluded.then_some("excluded"))} {ondblclick}>
            { row_tools }
            {
                for row.tiles().iter().map(|tile| html! {
                    <TileView
                        key={tile.id()}
                        tile={tile.clone()}
                        dragging={dragging == Some(tile.id())}
                        callback={callback.clone()}
                    />
                })
            }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct LockOverlayProps {
    row: Row,
    default_color: Color,
    color_tagging: bool,
    callback: Callback<Command>,
}

#[function_component(LockOverlay)]
fn lock_overlay(props: &LockOverlayProps) -> Html {
    let LockOverlayProps {
        row,
        default_color,
        color_tagging,
        callback,
    } = props.clone();

    let color = use_state(|| row.lock().map_or(default_color, |lock| lock.color));
    let theme = use_state(|| {
        row.lock()
            .map(|lock| lock.theme.clone())
            .unwrap_or_default()
    });

    let onsubmit = {
        let callback = callback.clone();
        let color = color.clone();
        let theme = theme.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            callback.emit(Command::SubmitLock {
                color: color_tagging.then_some(*color),
                theme: (*theme).clone(),
            });
        })
    };

    let oncolor = {
        let color = color.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.value().parse() {
                Ok(value) => color.set(value),
                Err(err) => log::warn!("ignoring color {:?}: {}", input.value(), err),
            }
        })
    };

    let ontheme = {
        let theme = theme.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            theme.set(input.value());
        })
    };

    let onclear = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(Command::ClearLock))
    };
    let oncancel = Callback::from(move |_: MouseEvent| callback.emit(Command::CloseOverlay));

    html! {
        <Modal>
            <div class="overlay">
                <h2>{ format!("Connect Words: {}", row.to_text()) }</h2>
                <form {onsubmit}>
                    if color_tagging {
                        <div>
                            <label>
                                {"Color: "}
                                <input type="color" title="color" value={color.to_string()} oninput={oncolor}/>
                            </label>
                        </div>
                    }
                    <div>
                        <label>
                            {"Theme: "}
                            <input type="text" placeholder="theme" value={(*theme).clone()} oninput={ontheme}/>
                        </label>
                    </div>
                    <div>
                        <input type="submit" value="connect"/>
                        <input type="button" value="clear" onclick={onclear}/>
                        <input type="button" value="cancel" onclick={oncancel}/>
                    </div>
                </form>
            </div>
        </Modal>
    }
}

/// Renders the board of a session, every interaction is sent back as a [`Command`].
pub(crate) fn board_view(session: &Session, callback: &Callback<Command>) -> Html {
    let grid = session.grid();
    let features = session.features();
    let dragging = session.dragging();

    let onshuffle = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(Command::Shuffle))
    };

    let overlay = match (session.overlay(), session.overlay_row()) {
        (Overlay::Editing(id), Some(row)) => html! {
            <LockOverlay
                key={id}
                row={row.clone()}
                default_color={grid.next_palette_color()}
                color_tagging={features.contains(Features::COLOR_TAGGING)}
                callback={callback.clone()}
            />
        },
        _ => html! {},
    };

    html! {
        <div class="board">
            {
                for grid.rows().iter().map(|row| html! {
                    <RowView
                        key={row.id()}
                        row={row.clone()}
                        excluded={grid.is_excluded(row.id())}
                        {features}
                        {dragging}
                        callback={callback.clone()}
                    />
                })
            }
            <button class="shuffle" onclick={onshuffle}>{"Shuffle Tiles"}</button>
            { overlay }
        </div>
    }
}
