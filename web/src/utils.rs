use gloo::storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};
use yew::prelude::*;

/// Key under which a value is kept in `localStorage`.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
    fn local_save(&self);
}

impl<T: StorageKey + Serialize + DeserializeOwned> LocalOrDefault for Option<T> {
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).ok()
    }

    fn local_save(&self) {
        match self {
            Some(value) => {
                if let Err(err) = LocalStorage::set(T::KEY, value) {
                    log::error!("failed to save {}: {:?}", T::KEY, err);
                }
            }
            None => LocalStorage::delete(T::KEY),
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Helper component to attatch the contents into the document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Turns a `--seed` argument into a shuffle seed, numbers are used as-is.
pub(crate) fn seed_from_str(seed: &str) -> u64 {
    // FNV-1a
    seed.parse().unwrap_or_else(|_| {
        seed.bytes().fold(0xcbf2_9ce4_8422_2325, |hash: u64, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seeds_are_kept() {
        assert_eq!(seed_from_str("42"), 42);
    }

    #[test]
    fn text_seeds_are_stable_and_distinct() {
        assert_eq!(seed_from_str("abc"), seed_from_str("abc"));
        assert_ne!(seed_from_str("abc"), seed_from_str("abd"));
        assert_eq!(seed_from_str(""), 0xcbf2_9ce4_8422_2325);
    }
}
