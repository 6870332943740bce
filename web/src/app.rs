use crate::board::board_view;
use crate::feed::{self, FetchError};
use crate::theme::Theme;
use crate::utils::LocalOrDefault;
use crate::word_input::WordInputPage;
use chabon_core::{Command, Features, Grid, Session};
use chabon_protocol::PuzzleDate;
use yew::prelude::*;

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct AppProps {
    pub seed: u64,
    pub date: Option<PuzzleDate>,
    pub manual: bool,
    pub features: Features,
}

#[derive(Debug)]
pub(crate) enum Screen {
    Loading(PuzzleDate),
    Failed(String),
    WordEntry,
    Board(Session),
}

#[derive(Debug)]
pub(crate) enum Msg {
    PuzzleLoaded(Result<Grid, FetchError>),
    WordsSubmitted(Vec<String>),
    Board(Command),
    ShowWordEntry,
    ToggleTheme,
}

#[derive(Debug)]
pub(crate) struct App {
    screen: Screen,
    seed: u64,
    features: Features,
    theme: Theme,
}

impl App {
    fn start_session(&mut self, grid: Grid) {
        log::debug!("starting session with features {:?}", self.features);
        self.screen = Screen::Board(Session::new(grid, self.features, self.seed));
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();

        let screen = if props.manual {
            Screen::WordEntry
        } else {
            match props.date.or_else(feed::local_date) {
                Some(date) => {
                    ctx.link()
                        .send_future(async move { Msg::PuzzleLoaded(feed::load_daily_grid(date).await) });
                    Screen::Loading(date)
                }
                None => Screen::Failed("Could not tell today's date".to_string()),
            }
        };

        Self {
            screen,
            seed: props.seed,
            features: props.features,
            theme: Option::<Theme>::local_or_default().unwrap_or_default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            PuzzleLoaded(Ok(grid)) => {
                self.start_session(grid);
                true
            }
            PuzzleLoaded(Err(err)) => {
                log::error!("failed to load daily puzzle: {}", err);
                self.screen = Screen::Failed(err.to_string());
                true
            }
            WordsSubmitted(words) => match Grid::from_words(words) {
                Ok(grid) => {
                    self.start_session(grid);
                    true
                }
                Err(err) => {
                    log::warn!("rejected word list: {}", err);
                    false
                }
            },
            Board(command) => match &mut self.screen {
                Screen::Board(session) => match session.apply(command) {
                    Ok(outcome) => outcome.has_update(),
                    Err(err) => {
                        log::warn!("rejected command: {}", err);
                        false
                    }
                },
                _ => false,
            },
            ShowWordEntry => {
                self.screen = Screen::WordEntry;
                true
            }
            ToggleTheme => {
                self.theme = self.theme.toggled();
                log::debug!("theme: {:?}", self.theme);
                Some(self.theme).local_save();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let cb_toggle_theme = link.callback(|_: MouseEvent| Msg::ToggleTheme);

        let content = match &self.screen {
            Screen::Loading(date) => html! {
                <p class="loading">{ format!("Loading the puzzle of {}…", date) }</p>
            },
            Screen::Failed(message) => {
                let cb_word_entry = link.callback(|_: MouseEvent| Msg::ShowWordEntry);
                html! {
                    <div class="error">
                        <p>{ message.clone() }</p>
                        <button onclick={cb_word_entry}>{"Enter words instead"}</button>
                    </div>
                }
            }
            Screen::WordEntry => html! {
                <WordInputPage onsubmit={link.callback(Msg::WordsSubmitted)}/>
            },
            Screen::Board(session) => board_view(session, &link.callback(Msg::Board)),
        };

        html! {
            <div class={classes!("App", self.theme.class())}>
                <header>
                    <h1>{"CONNECTIONS"}</h1>
                    <small onclick={cb_toggle_theme}>{"◐"}</small>
                </header>
                { content }
            </div>
        }
    }
}
