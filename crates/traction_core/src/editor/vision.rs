//! VTO editor.
//!
//! Scalar sections are edited through [`VisionField`]; the three free-text
//! lists are [`EditableList`]s of [`TextItem`] so that individual bullets
//! can be removed by id while the form is open.

use crate::model::domain::VISION_KEY;
use crate::model::editable_list::{EditableList, TextItem, TextItemField};
use crate::model::vision::{
    CoreFocus, MarketingStrategy, ThreeYearPicture, VisionDocument, Vto,
};
use crate::repo::record_repo::{generate_unique_id, RecordStore};
use serde_json::{Map, Value};

/// Free-text lists inside the VTO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisionList {
    CoreValues,
    ThreeUniques,
    /// Three-year picture "what does it look like" bullets.
    LooksLike,
}

/// Single-value VTO fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisionField {
    Passion,
    Niche,
    TenYearTarget,
    TargetMarket,
    FutureDate,
    Revenue,
    Profit,
    Measurables,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisionEditor {
    core_values: EditableList<TextItem>,
    three_uniques: EditableList<TextItem>,
    looks_like: EditableList<TextItem>,
    core_focus: CoreFocus,
    ten_year_target: String,
    target_market: String,
    future_date: String,
    revenue: String,
    profit: String,
    measurables: String,
    // Sections without an editor yet; carried through saves unchanged.
    one_year_plan: Map<String, Value>,
    rocks: Vec<String>,
    issues: Vec<String>,
}

impl VisionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: RecordStore>(store: &S) -> Self {
        let document = store
            .load_as::<VisionDocument>(VISION_KEY)
            .unwrap_or_default();
        Self::from_document(document)
    }

    pub fn from_document(document: VisionDocument) -> Self {
        let vto = document.vto;
        Self {
            core_values: text_items(vto.core_values),
            three_uniques: text_items(vto.marketing_strategy.three_uniques),
            looks_like: text_items(vto.three_year_picture.looks_like),
            core_focus: vto.core_focus,
            ten_year_target: vto.ten_year_target,
            target_market: vto.marketing_strategy.target_market,
            future_date: vto.three_year_picture.future_date,
            revenue: vto.three_year_picture.revenue,
            profit: vto.three_year_picture.profit,
            measurables: vto.three_year_picture.measurables,
            one_year_plan: vto.one_year_plan,
            rocks: vto.rocks,
            issues: vto.issues,
        }
    }

    pub fn list(&self, list: VisionList) -> &EditableList<TextItem> {
        match list {
            VisionList::CoreValues => &self.core_values,
            VisionList::ThreeUniques => &self.three_uniques,
            VisionList::LooksLike => &self.looks_like,
        }
    }

    fn list_mut(&mut self, list: VisionList) -> &mut EditableList<TextItem> {
        match list {
            VisionList::CoreValues => &mut self.core_values,
            VisionList::ThreeUniques => &mut self.three_uniques,
            VisionList::LooksLike => &mut self.looks_like,
        }
    }

    /// Appends an empty bullet to `list` and returns its id.
    pub fn add_item(&mut self, list: VisionList) -> String {
        let item = TextItem::new(generate_unique_id(), "");
        let id = item.id.clone();
        self.list_mut(list).append(item);
        id
    }

    pub fn remove_item(&mut self, list: VisionList, id: &str) -> Option<TextItem> {
        self.list_mut(list).remove(id)
    }

    pub fn set_item(&mut self, list: VisionList, id: &str, text: impl Into<String>) -> bool {
        self.list_mut(list).set_field(id, TextItemField::Text, text)
    }

    pub fn set_field(&mut self, field: VisionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            VisionField::Passion => self.core_focus.passion = value,
            VisionField::Niche => self.core_focus.niche = value,
            VisionField::TenYearTarget => self.ten_year_target = value,
            VisionField::TargetMarket => self.target_market = value,
            VisionField::FutureDate => self.future_date = value,
            VisionField::Revenue => self.revenue = value,
            VisionField::Profit => self.profit = value,
            VisionField::Measurables => self.measurables = value,
        }
    }

    /// Document written by [`VisionEditor::save`]; empty bullets are dropped.
    pub fn document(&self) -> VisionDocument {
        VisionDocument {
            vto: Vto {
                core_values: filled_texts(&self.core_values),
                core_focus: self.core_focus.clone(),
                ten_year_target: self.ten_year_target.clone(),
                marketing_strategy: MarketingStrategy {
                    target_market: self.target_market.clone(),
                    three_uniques: filled_texts(&self.three_uniques),
                },
                three_year_picture: ThreeYearPicture {
                    future_date: self.future_date.clone(),
                    revenue: self.revenue.clone(),
                    profit: self.profit.clone(),
                    measurables: self.measurables.clone(),
                    looks_like: filled_texts(&self.looks_like),
                },
                one_year_plan: self.one_year_plan.clone(),
                rocks: self.rocks.clone(),
                issues: self.issues.clone(),
            },
        }
    }

    pub fn save<S: RecordStore>(&mut self, store: &S) {
        for list in [
            VisionList::CoreValues,
            VisionList::ThreeUniques,
            VisionList::LooksLike,
        ] {
            self.list_mut(list).retain(|item| !item.text.is_empty());
        }
        store.save_as(VISION_KEY, &self.document());
    }
}

fn text_items(texts: Vec<String>) -> EditableList<TextItem> {
    EditableList::from_entries(
        texts
            .into_iter()
            .map(|text| TextItem::new(generate_unique_id(), text))
            .collect(),
    )
}

fn filled_texts(items: &EditableList<TextItem>) -> Vec<String> {
    items
        .saved_entries(|item| !item.text.is_empty())
        .into_iter()
        .map(|item| item.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{VisionEditor, VisionField, VisionList};

    #[test]
    fn document_drops_empty_bullets() {
        let mut editor = VisionEditor::new();
        let kept = editor.add_item(VisionList::CoreValues);
        editor.add_item(VisionList::CoreValues);
        assert!(editor.set_item(VisionList::CoreValues, &kept, "Help first"));
        editor.set_field(VisionField::Passion, "Small business growth");

        let document = editor.document();
        assert_eq!(document.vto.core_values, ["Help first"]);
        assert_eq!(document.vto.core_focus.passion, "Small business growth");
        assert_eq!(editor.list(VisionList::CoreValues).len(), 2);
    }

    #[test]
    fn remove_item_only_touches_named_list() {
        let mut editor = VisionEditor::new();
        let unique = editor.add_item(VisionList::ThreeUniques);
        assert!(editor.remove_item(VisionList::CoreValues, &unique).is_none());
        assert!(editor.remove_item(VisionList::ThreeUniques, &unique).is_some());
    }
}
