//! The static table of categories and items that get pictures.
//!
//! Order matters: batches walk categories and items in the order listed here.

use std::path::{Path, PathBuf};

use crate::error::SelectionError;

/// A named subject within a category.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Item {
    /// File-safe name, used for the output file stem
    pub name: &'static str,
    /// Free-text description substituted into the style template
    pub subject: &'static str,
}

impl Item {
    const fn new(name: &'static str, subject: &'static str) -> Self {
        Self { name, subject }
    }
}

/// A top-level grouping of items, eg `animals`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Category {
    /// Category name, used for the output directory
    pub name: &'static str,
    /// Items in generation order
    pub items: &'static [Item],
}

impl Category {
    /// Looks up an item by name.
    pub fn item(&self, name: &str) -> Option<&'static Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Names of every item in this category, in order.
    pub fn item_names(&self) -> Vec<&'static str> {
        self.items.iter().map(|item| item.name).collect()
    }
}

/// Every category the app knows about.
pub static CATALOG: &[Category] = &[
    Category {
        name: "animals",
        items: &[
            Item::new("lion", "a lion standing majestically, full body visible"),
            Item::new("tiger", "a Bengal tiger standing alert, full body visible"),
            Item::new("dog", "a friendly golden retriever dog, full body visible"),
            Item::new("cat", "a cute orange tabby cat sitting, full body visible"),
            Item::new("pig", "a pink pig standing, full body visible"),
            Item::new("rhino", "a rhinoceros standing, full body visible"),
            Item::new("hippo", "a hippopotamus standing near water, full body visible"),
            Item::new("horse", "a brown horse standing in a field, full body visible"),
            Item::new("donkey", "a grey donkey standing, full body visible"),
            Item::new("zebra", "a zebra standing, full body visible with distinctive stripes"),
            Item::new("sheep", "a fluffy white sheep standing, full body visible"),
            Item::new("goat", "a goat standing, full body visible"),
            Item::new("llama", "a llama standing, full body visible"),
            Item::new("camel", "a camel standing, full body visible"),
            Item::new("elephant", "an elephant standing majestically, full body visible"),
            Item::new("alligator", "an alligator resting on a riverbank, full body visible"),
            Item::new("gorilla", "a silverback gorilla sitting, full body visible"),
            Item::new("chimpanzee", "a chimpanzee sitting, full body visible"),
            Item::new("orangutan", "an orangutan sitting, full body visible"),
            Item::new(
                "monkey",
                "an Indian rhesus macaque monkey sitting on a branch, full body visible",
            ),
            Item::new("deer", "a spotted deer standing alert, full body visible"),
        ],
    },
    Category {
        name: "birds",
        items: &[
            Item::new("peacock", "a peacock with its colorful tail feathers fully displayed"),
            Item::new("crow", "a black crow perched on a branch, full body visible"),
            Item::new("pigeon", "a grey pigeon standing on the ground, full body visible"),
            Item::new("hen", "a brown hen standing, full body visible"),
            Item::new(
                "rooster",
                "a colorful rooster standing with prominent red comb and tail feathers",
            ),
            Item::new("turkey", "a turkey with fanned tail feathers, full body visible"),
            Item::new("parrot", "a colorful green and red macaw parrot perched on a branch"),
            Item::new("sparrow", "a small brown sparrow perched on a twig, full body visible"),
            Item::new("duck", "a mallard duck standing near water, full body visible"),
            Item::new("swan", "a graceful white swan gliding on calm water"),
            Item::new("ostrich", "an ostrich standing tall, full body visible"),
            Item::new("eagle", "a bald eagle perched majestically on a branch"),
            Item::new("vulture", "a vulture perched with wings slightly spread, full body visible"),
        ],
    },
    Category {
        name: "food",
        items: &[
            Item::new("pizza", "a delicious pepperoni pizza with melted cheese on a wooden board"),
            Item::new("burger", "a juicy cheeseburger with lettuce, tomato, and sesame bun"),
            Item::new(
                "dosa",
                "a crispy golden South Indian masala dosa with coconut chutney and sambar",
            ),
            Item::new("vada", "crispy golden South Indian medu vada served with coconut chutney"),
            Item::new("rice", "a plate of fluffy steaming white basmati rice"),
            Item::new(
                "ice-cream",
                "a colorful ice cream cone with three scoops of different flavors",
            ),
            Item::new("french-fries", "a generous serving of crispy golden french fries"),
            Item::new("fish", "a beautifully plated grilled fish with lemon and herbs"),
            Item::new("pasta", "a plate of spaghetti pasta with rich red marinara sauce"),
            Item::new("yogurt", "a bowl of creamy white yogurt with a swirl on top"),
            Item::new("soup", "a bowl of hot vegetable soup with visible steam rising"),
            Item::new(
                "kebab",
                "grilled meat kebab pieces on a metal skewer with colorful vegetables",
            ),
        ],
    },
    Category {
        name: "transportation",
        items: &[
            Item::new("bicycle", "a classic bicycle standing on its kickstand, side view"),
            Item::new("electric-scooter", "a modern electric kick scooter, side view"),
            Item::new("moped", "a classic Vespa-style moped scooter, side view"),
            Item::new("motorcycle", "a sport motorcycle, side view"),
            Item::new("car", "a modern red sedan car, three-quarter front view"),
            Item::new("truck", "a large delivery truck on a road, side view"),
            Item::new("bus", "a colorful city public transit bus, side view"),
            Item::new("train", "a modern passenger train at a station platform, side view"),
            Item::new("aeroplane", "a commercial passenger airplane in flight against a blue sky"),
            Item::new("rocket", "a space rocket on a launch pad ready for takeoff"),
        ],
    },
    Category {
        name: "profession",
        items: &[
            Item::new(
                "doctor",
                "a doctor in a white coat examining a patient with a stethoscope in a bright medical office",
            ),
            Item::new(
                "surgeon",
                "a surgeon in blue scrubs and surgical mask performing surgery in an operating theater with bright lights",
            ),
            Item::new(
                "software-engineer",
                "a software engineer sitting at a desk with dual monitors displaying colorful code and data visualization plots",
            ),
            Item::new(
                "scientist",
                "a scientist in a white lab coat carefully mixing colorful chemicals in test tubes and beakers in a laboratory",
            ),
            Item::new(
                "mechanic",
                "an auto mechanic in overalls working on a car engine in a well-lit garage",
            ),
            Item::new(
                "teacher",
                "a teacher standing at a whiteboard with diagrams, teaching an engaged class of students",
            ),
            Item::new(
                "pilot",
                "an airline pilot in uniform sitting in an airplane cockpit surrounded by instruments and controls",
            ),
            Item::new(
                "air-hostess",
                "a smiling flight attendant in uniform serving food trays to passengers inside an airplane cabin",
            ),
            Item::new(
                "athlete",
                "an athlete in sportswear sprinting on a running track in a stadium",
            ),
            Item::new(
                "chauffeur",
                "a professional chauffeur in a dark suit and cap driving a luxury sedan, viewed from inside the car",
            ),
        ],
    },
];

/// Looks up a category by name.
pub fn category(name: &str) -> Option<&'static Category> {
    CATALOG.iter().find(|category| category.name == name)
}

/// Names of every category, in order.
pub fn category_names() -> Vec<&'static str> {
    CATALOG.iter().map(|category| category.name).collect()
}

/// One unit of work: an item and the category it belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Entry {
    /// Owning category
    pub category: &'static Category,
    /// The item itself
    pub item: &'static Item,
}

impl Entry {
    /// `<category>/<item>`, used in progress output.
    pub fn label(&self) -> String {
        format!("{}/{}", self.category.name, self.item.name)
    }

    /// Where this entry's picture lives under `root`.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        crate::output::output_path(root, self.category.name, self.item.name)
    }
}

/// The slice of the catalog a batch works on, grouped by category.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Selection {
    groups: Vec<(&'static Category, Vec<&'static Item>)>,
}

impl Selection {
    /// Picks categories and items based on the optional filters.
    ///
    /// No filters selects everything; `category` alone selects that category;
    /// `category` with `item` selects exactly one entry. An item without a
    /// category is rejected.
    pub fn new(category: Option<&str>, item: Option<&str>) -> Result<Self, SelectionError> {
        let groups = match (category, item) {
            (None, Some(_)) => return Err(SelectionError::ItemWithoutCategory),
            (None, None) => CATALOG
                .iter()
                .map(|category| (category, category.items.iter().collect()))
                .collect(),
            (Some(name), item) => {
                let found = self::category(name).ok_or_else(|| {
                    SelectionError::UnknownCategory {
                        name: name.to_string(),
                        valid: category_names(),
                    }
                })?;
                let items = match item {
                    None => found.items.iter().collect(),
                    Some(item_name) => {
                        let item = found.item(item_name).ok_or_else(|| {
                            SelectionError::UnknownItem {
                                category: found.name.to_string(),
                                name: item_name.to_string(),
                                valid: found.item_names(),
                            }
                        })?;
                        vec![item]
                    }
                };
                vec![(found, items)]
            }
        };
        Ok(Self { groups })
    }

    /// Categories with the items picked from each.
    pub fn groups(&self) -> &[(&'static Category, Vec<&'static Item>)] {
        &self.groups
    }

    /// Number of categories selected.
    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of items across all selected categories.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattened entries in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.groups.iter().flat_map(|(category, items)| {
            let category = *category;
            items.iter().map(move |item| Entry {
                category,
                item: *item,
            })
        })
    }
}
