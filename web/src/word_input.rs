use chabon_core::TILE_COUNT;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct WordInputProps {
    pub onsubmit: Callback<Vec<String>>,
}

/// Form with one field per tile, submitted words keep their input order.
#[function_component(WordInputPage)]
pub(crate) fn word_input_page(props: &WordInputProps) -> Html {
    let words = use_state(|| vec![String::new(); TILE_COUNT]);

    let onsubmit = {
        let words = words.clone();
        let callback = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("words submitted: {:?}", *words);
            callback.emit((*words).clone());
        })
    };

    html! {
        <form class="word-input" {onsubmit}>
            <h2>{ format!("Enter {} Words", TILE_COUNT) }</h2>
            <div class="word-fields">
                {
                    for words.iter().enumerate().map(|(index, word)| {
                        let oninput = {
                            let words = words.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*words).clone();
                                next[index] = input.value();
                                words.set(next);
                            })
                        };
                        html! {
                            <input
                                type="text"
                                value={word.clone()}
                                placeholder={format!("Word {}", index + 1)}
                                {oninput}
                            />
                        }
                    })
                }
            </div>
            <button type="submit">{"Submit"}</button>
        </form>
    }
}
