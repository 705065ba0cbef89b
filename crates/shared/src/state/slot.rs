/// The state of one piece of loaded data
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot<T> {
    #[default]
    NotRequested,
    Loading,
    /// The server answered with nothing to show
    Empty,
    Loaded(T),
    Failed(String),
}

impl<T> Slot<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Slot::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Slot::Loaded(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> Slot<Vec<T>> {
    /// An empty list is stored as [Slot::Empty]
    pub fn from_list(list: Vec<T>) -> Self {
        if list.is_empty() {
            Slot::Empty
        } else {
            Slot::Loaded(list)
        }
    }

    /// The items to render, none unless loaded
    pub fn items(&self) -> &[T] {
        self.loaded().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<T> Slot<T> {
    pub fn from_option(value: Option<T>) -> Self {
        value.map(Slot::Loaded).unwrap_or(Slot::Empty)
    }
}
