use serde::Serialize;
use serde_json::Value;

use super::to_wire;
use crate::error::Result;

/// An ad-hoc query executed against the API's resource tree.
///
/// Queries select entities with XPath-like selectors, filter them, and
/// project named outputs. The result shape is whatever the query projects,
/// decoded generically like every other response.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_node_name: Option<String>,

    #[serde(rename = "Variables", skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<NameValuePair>,

    #[serde(rename = "Groups", skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<EntityGroup>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_root_node_name(mut self, value: impl Into<String>) -> Self {
        self.root_node_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_variable(mut self, variable: NameValuePair) -> Self {
        self.variables.push(variable);
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: EntityGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "Query")
    }
}

/// A named substitution variable, referenced as `[name]` in selectors.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NameValuePair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl NameValuePair {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// Selects a set of entities and projects outputs from each.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// Entity selector path, e.g. `Employer/[EmployerKey]/Employee`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Node name each selected entity is emitted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    #[serde(rename = "Filters", skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<QueryFilter>,

    #[serde(rename = "Outputs", skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<QueryOutput>,
}

impl EntityGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_group_name(mut self, value: impl Into<String>) -> Self {
        self.group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_selector(mut self, value: impl Into<String>) -> Self {
        self.selector = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_item_name(mut self, value: impl Into<String>) -> Self {
        self.item_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: QueryFilter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: QueryOutput) -> Self {
        self.outputs.push(output);
        self
    }
}

/// Filters selected entities on a property comparison.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// `Equals`, `NotEquals`, `GreaterThan`, `LessThan` or `Contains`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
}

impl QueryFilter {
    #[must_use]
    pub fn new(property: impl Into<String>, comparison: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            value: Some(value.into()),
            comparison: Some(comparison.into()),
        }
    }
}

/// Projects a property of each selected entity into the result.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl QueryOutput {
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_formats_nested_groups() {
        let query = Query::new()
            .with_root_node_name("ActiveEmployees")
            .with_variable(NameValuePair::new("EmployerKey", "ER001"))
            .with_group(
                EntityGroup::new()
                    .with_group_name("Employees")
                    .with_selector("Employer/[EmployerKey]/Employee")
                    .with_filter(QueryFilter::new("LeavingDate", "Equals", ""))
                    .with_output(QueryOutput::new("FirstName"))
                    .with_output(QueryOutput::new("LastName")),
            );

        let value = query.format().unwrap();
        assert_eq!(value["RootNodeName"], "ActiveEmployees");
        assert_eq!(value["Variables"][0]["Name"], "EmployerKey");
        assert_eq!(
            value["Groups"][0]["Selector"],
            "Employer/[EmployerKey]/Employee"
        );
        assert_eq!(value["Groups"][0]["Outputs"][1]["Property"], "LastName");
    }
}
