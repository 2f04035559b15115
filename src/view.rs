//! Portfolio view state and the items each state shows.
//!
//! The page's interactive state is a small struct driven by messages:
//!
//! ```text
//! Message ──► ViewState::update ──► (new state, Option<Command>)
//!                    │
//!                    └──► visible_items(&Catalog) ──► Vec<VisibleItem>
//! ```
//!
//! Everything here is pure. The generate stage walks every state reachable
//! from the default through tab and filter messages and renders one page per
//! state; clicks on rendered items are resolved by feeding the click message
//! through [`ViewState::update`] (see [`ViewState::click_target`]).

use crate::catalog::{Catalog, Category, MediaItem, find_category};

/// Vertical offset applied when smooth-scrolling to a section, so the fixed
/// nav bar does not cover the section heading.
pub const SCROLL_OFFSET_PX: i32 = -80;

/// Scroll distance after which the nav bar switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Photography,
    Videography,
    Reels,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Photography, Tab::Videography, Tab::Reels];

    pub fn name(self) -> &'static str {
        match self {
            Tab::Photography => "photography",
            Tab::Videography => "videography",
            Tab::Reels => "reels",
        }
    }
}

/// Category filter for the photography and videography tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// One representative item per category.
    #[default]
    All,
    /// Every item of one category.
    Category(String),
}

impl Filter {
    /// `"all"` is the all-categories filter; anything else names a category.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

/// In-page sections reachable from the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Portfolio,
    About,
    Clients,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::Portfolio,
        Anchor::About,
        Anchor::Clients,
        Anchor::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Portfolio => "portfolio",
            Anchor::About => "about",
            Anchor::Clients => "clients",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Portfolio => "Portfolio",
            Anchor::About => "About",
            Anchor::Clients => "Clients",
            Anchor::Contact => "Contact",
        }
    }
}

/// User input the view state reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Tab bar button.
    SelectTab(Tab),
    SetPhotoFilter(Filter),
    SetVideoFilter(Filter),
    /// Click on a photography card tagged with `category`.
    PhotoClicked { category: String },
    /// Click on a videography card.
    VideoClicked {
        category: String,
        external_link: Option<String>,
    },
    ReelClicked { external_link: Option<String> },
    /// Hamburger button.
    MenuToggled,
    /// Tab entry in the mobile menu.
    MenuSelected(Tab),
    /// Section link in the nav bar.
    NavClicked(Anchor),
    /// Wordmark in the nav bar.
    BrandClicked,
    /// Window scrolled to this vertical offset.
    Scrolled(f64),
}

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the URL in a new browsing context.
    OpenExternal(String),
    /// Smooth-scroll to a section, offset by [`SCROLL_OFFSET_PX`].
    ScrollTo(Anchor),
    ScrollToTop,
}

/// Where a click on a rendered element leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Nothing happens.
    Inert,
    /// The portfolio switches to another view.
    View(ViewState),
    /// A link opens in a new browsing context.
    External(String),
}

/// An item as shown in the grid, tagged with the category it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem<'a> {
    /// `None` for reels.
    pub category: Option<&'a str>,
    pub item: &'a MediaItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewState {
    pub active_tab: Tab,
    pub photo_filter: Filter,
    pub video_filter: Filter,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Photography,
            photo_filter: Filter::All,
            video_filter: Filter::All,
            menu_open: false,
            scrolled: false,
        }
    }
}

impl ViewState {
    /// Apply one message. Returns the side effect it asks for, if any.
    pub fn update(&mut self, message: Message) -> Option<Command> {
        match message {
            Message::SelectTab(tab) => {
                self.select_tab(tab);
                None
            }
            Message::SetPhotoFilter(filter) => {
                self.photo_filter = filter;
                None
            }
            Message::SetVideoFilter(filter) => {
                self.video_filter = filter;
                None
            }
            Message::PhotoClicked { category } => {
                if self.photo_filter.is_all() {
                    self.photo_filter = Filter::Category(category);
                }
                None
            }
            Message::VideoClicked {
                category,
                external_link,
            } => {
                if self.video_filter.is_all() {
                    self.video_filter = Filter::Category(category);
                    None
                } else {
                    open_link(external_link)
                }
            }
            Message::ReelClicked { external_link } => open_link(external_link),
            Message::MenuToggled => {
                self.menu_open = !self.menu_open;
                None
            }
            Message::MenuSelected(tab) => {
                self.select_tab(tab);
                self.menu_open = false;
                Some(Command::ScrollTo(Anchor::Portfolio))
            }
            Message::NavClicked(anchor) => {
                if anchor == Anchor::Portfolio && self.active_tab != Tab::Photography {
                    self.select_tab(Tab::Photography);
                }
                self.menu_open = false;
                Some(Command::ScrollTo(anchor))
            }
            Message::BrandClicked => Some(Command::ScrollToTop),
            Message::Scrolled(y) => {
                self.scrolled = y > SCROLLED_THRESHOLD_PX;
                None
            }
        }
    }

    /// Switching tabs always starts both filters over at "all".
    fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.photo_filter = Filter::All;
        self.video_filter = Filter::All;
    }

    /// Resolve what clicking an element that sends `message` does from this
    /// state. Changes to the menu or scroll flags alone count as inert.
    pub fn click_target(&self, message: Message) -> ClickTarget {
        let mut next = self.clone();
        match next.update(message) {
            Some(Command::OpenExternal(url)) => ClickTarget::External(url),
            _ if !next.same_view(self) => {
                next.menu_open = false;
                next.scrolled = false;
                ClickTarget::View(next)
            }
            _ => ClickTarget::Inert,
        }
    }

    /// Same tab and filters, ignoring the transient menu and scroll flags.
    pub fn same_view(&self, other: &ViewState) -> bool {
        self.active_tab == other.active_tab
            && self.photo_filter == other.photo_filter
            && self.video_filter == other.video_filter
    }

    /// Items the portfolio grid shows in this state.
    pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<VisibleItem<'a>> {
        match self.active_tab {
            Tab::Photography => visible(&catalog.photography, &self.photo_filter),
            Tab::Videography => visible(&catalog.videography, &self.video_filter),
            Tab::Reels => catalog
                .reels
                .iter()
                .map(|item| VisibleItem {
                    category: None,
                    item,
                })
                .collect(),
        }
    }

    /// The filter in effect for the active tab. Reels have none.
    pub fn active_filter(&self) -> Option<&Filter> {
        match self.active_tab {
            Tab::Photography => Some(&self.photo_filter),
            Tab::Videography => Some(&self.video_filter),
            Tab::Reels => None,
        }
    }
}

/// Items for one category filter.
///
/// - [`Filter::All`]: the first item of each category, in category order.
/// - [`Filter::Category`]: every item of that category, or nothing if the
///   category does not exist.
pub fn visible<'a>(categories: &'a [Category], filter: &Filter) -> Vec<VisibleItem<'a>> {
    match filter {
        Filter::All => categories
            .iter()
            .filter_map(|c| {
                c.representative().map(|item| VisibleItem {
                    category: Some(c.name.as_str()),
                    item,
                })
            })
            .collect(),
        Filter::Category(name) => find_category(categories, name)
            .map(|c| {
                c.items
                    .iter()
                    .map(|item| VisibleItem {
                        category: Some(c.name.as_str()),
                        item,
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Every view reachable through tab and filter messages, starting from the
/// default state.
///
/// Order: photography (all, then each category), videography (all, then each
/// category), reels.
pub fn reachable_states(catalog: &Catalog) -> Vec<ViewState> {
    let mut states = Vec::new();

    for tab in Tab::ALL {
        let mut base = ViewState::default();
        base.update(Message::SelectTab(tab));
        states.push(base.clone());

        let category_filter = |c: &Category| Filter::Category(c.name.clone());
        let messages: Vec<Message> = match tab {
            Tab::Photography => catalog
                .photography
                .iter()
                .map(|c| Message::SetPhotoFilter(category_filter(c)))
                .collect(),
            Tab::Videography => catalog
                .videography
                .iter()
                .map(|c| Message::SetVideoFilter(category_filter(c)))
                .collect(),
            Tab::Reels => Vec::new(),
        };
        for message in messages {
            let mut state = base.clone();
            state.update(message);
            states.push(state);
        }
    }

    states
}

fn open_link(link: Option<String>) -> Option<Command> {
    link.filter(|l| !l.trim().is_empty())
        .map(Command::OpenExternal)
}
