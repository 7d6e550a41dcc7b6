use crate::extensions::model::{AgentInstructions, ResourceExtension, Topic};
use indexmap::IndexMap;

/// Immutable mapping from resource identifier to its extension block.
///
/// Insertion order doubles as the processing order of a patch run.
pub struct ExtensionTable {
    entries: IndexMap<&'static str, ResourceExtension>,
}

impl ExtensionTable {
    /// Builds the table of extensions for the built-in Salesforce resources
    pub fn builtin() -> Self {
        let mut entries = IndexMap::new();
        entries.insert("AccountResource", account_extension());
        entries.insert("ContactResource", contact_extension());
        entries.insert("CaseResource", case_extension());
        Self { entries }
    }

    /// Looks up the extension block for a resource identifier
    pub fn get(&self, resource_id: &str) -> Option<&ResourceExtension> {
        self.entries.get(resource_id)
    }

    /// Resource identifiers in processing order
    pub fn resource_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of resources the table covers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn account_extension() -> ResourceExtension {
    ResourceExtension {
        topics: vec![Topic {
            name: "Account Management".to_string(),
            description: "Operations for managing Account records in Salesforce".to_string(),
            instructions: "Use this API when the user wants to find, create, update, or delete accounts. When multiple accounts match a search, ask the user for additional details like city or industry to narrow down the selection.".to_string(),
        }],
        agent_instructions: AgentInstructions {
            get: "When retrieving accounts, if multiple matches are found, present all options and ask the user to provide more details (like city or industry) to narrow down the selection.".to_string(),
            post: "When creating an account, ensure the Name field is provided. If the user doesn't specify other fields, you can ask for optional information like Industry or Billing City.".to_string(),
            put: "When updating an account, if the user doesn't specify what to update, return the current account data and ask which fields they want to change.".to_string(),
            delete: "Confirm with the user before deleting an account, as this action cannot be undone.".to_string(),
        },
    }
}

fn contact_extension() -> ResourceExtension {
    ResourceExtension {
        topics: vec![Topic {
            name: "Contact Management".to_string(),
            description: "Operations for managing Contact records in Salesforce".to_string(),
            instructions: "Use this API when the user wants to find, create, update, or delete contacts. When creating a contact with an accountName, if the Account doesn't exist, ask the user the questions required to create that Account (Name is required, Industry and BillingCity are optional). When multiple contacts match a search, ask for additional details like email or account name to narrow down.".to_string(),
        }],
        agent_instructions: AgentInstructions {
            get: "When retrieving contacts, if multiple matches are found, present all options and ask the user to provide more details (like email or account name) to narrow down the selection.".to_string(),
            post: "When creating a contact, ensure LastName is provided. If accountName is specified but the Account doesn't exist, ask the user the questions needed to create that Account (Name required, Industry and BillingCity optional).".to_string(),
            put: "When updating a contact, if the user doesn't specify what to update, return the current contact data and ask which fields they want to change.".to_string(),
            delete: "Confirm with the user before deleting a contact, as this action cannot be undone.".to_string(),
        },
    }
}

fn case_extension() -> ResourceExtension {
    ResourceExtension {
        topics: vec![Topic {
            name: "Case Management".to_string(),
            description: "Operations for managing Case records in Salesforce".to_string(),
            instructions: "Use this API when the user wants to find, create, update, or delete cases. When creating a case with accountName or contactNameOrEmail, if those records don't exist, ask the user the questions required to create them. When multiple cases match a search, ask for additional details like status or account name to narrow down.".to_string(),
        }],
        agent_instructions: AgentInstructions {
            get: "When retrieving cases, if multiple matches are found, present all options and ask the user to provide more details (like status or account name) to narrow down the selection.".to_string(),
            post: "When creating a case, ensure Subject is provided. If accountName or contactNameOrEmail is specified but those records don't exist, ask the user the questions needed to create them (Account: Name required, Industry and BillingCity optional; Contact: LastName required, Email optional).".to_string(),
            put: "When updating a case, if the user doesn't specify what to update, return the current case data and ask which fields they want to change.".to_string(),
            delete: "Confirm with the user before deleting a case, as this action cannot be undone.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_covers_the_three_resources_in_order() {
        let table = ExtensionTable::builtin();

        let ids: Vec<&str> = table.resource_ids().collect();
        assert_eq!(
            ids,
            vec!["AccountResource", "ContactResource", "CaseResource"]
        );
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn unknown_resource_has_no_entry() {
        let table = ExtensionTable::builtin();

        assert!(table.get("LeadResource").is_none());
    }

    #[test]
    fn every_entry_carries_one_topic_and_four_verb_instructions() {
        let table = ExtensionTable::builtin();

        for id in table.resource_ids() {
            let extension = table.get(id).unwrap();
            assert_eq!(extension.topics.len(), 1, "{id}");
            assert!(!extension.agent_instructions.get.is_empty(), "{id}");
            assert!(!extension.agent_instructions.post.is_empty(), "{id}");
            assert!(!extension.agent_instructions.put.is_empty(), "{id}");
            assert!(!extension.agent_instructions.delete.is_empty(), "{id}");
        }
    }
}
