use serde::Serialize;
use serde_json::Value;

use super::to_wire;
use crate::error::Result;

/// A hypermedia link to another API resource, e.g. an employee's pay
/// schedule. Link attributes use the API's `@`-prefixed key convention.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Link {
    #[serde(rename = "@title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(rename = "@rel", skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

impl Link {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for the common case of a bare href.
    #[must_use]
    pub fn to(href: impl Into<String>) -> Self {
        Self::new().with_href(href)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "Link")
    }
}

/// A single metadata name/value entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetaDataItem {
    #[serde(rename = "@name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "#text", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl MetaDataItem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Free-form caller metadata attachable to most resources.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetaData {
    #[serde(rename = "Item", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MetaDataItem>,
}

impl MetaData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(mut self, item: MetaDataItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "MetaData")
    }
}

/// Scalar pay-code lists nest under a singular `PayCode` key on the wire,
/// e.g. `"PensionablePayCodes": {"PayCode": ["BASIC", "OT1"]}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PayCodeList {
    #[serde(rename = "PayCode")]
    pub codes: Vec<String>,
}

impl PayCodeList {
    #[must_use]
    pub fn new(codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }
}

/// A UK postal address.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_address1(mut self, value: impl Into<String>) -> Self {
        self.address1 = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_address2(mut self, value: impl Into<String>) -> Self {
        self.address2 = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_address3(mut self, value: impl Into<String>) -> Self {
        self.address3 = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_address4(mut self, value: impl Into<String>) -> Self {
        self.address4 = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_postcode(mut self, value: impl Into<String>) -> Self {
        self.postcode = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(value.into());
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "Address")
    }
}

/// A UK bank account used for net pay and HMRC payments.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl BankAccount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_account_name(mut self, value: impl Into<String>) -> Self {
        self.account_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_account_number(mut self, value: impl Into<String>) -> Self {
        self.account_number = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_sort_code(mut self, value: impl Into<String>) -> Self {
        self.sort_code = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, value: impl Into<String>) -> Self {
        self.reference = Some(value.into());
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "BankAccount")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_uses_attribute_keys() {
        let link = Link::to("/Employer/ER001/PaySchedule/SCH001").with_rel("PaySchedule");
        let value = link.format().unwrap();
        assert_eq!(value["@href"], "/Employer/ER001/PaySchedule/SCH001");
        assert_eq!(value["@rel"], "PaySchedule");
        assert!(value.get("@title").is_none());
    }

    #[test]
    fn pay_code_list_wraps_under_singular_key() {
        let list = PayCodeList::new(["BASIC", "OT1"]);
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value, serde_json::json!({"PayCode": ["BASIC", "OT1"]}));
    }

    #[test]
    fn unset_fields_are_omitted() {
        let address = Address::new().with_address1("1 High Street");
        let value = address.format().unwrap();
        assert_eq!(value, serde_json::json!({"Address1": "1 High Street"}));
    }
}
