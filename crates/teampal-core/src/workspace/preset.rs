//! Built-in default workspace contents.
//!
//! Used when no folder snapshot has been persisted yet, so a fresh install
//! starts with a populated workspace instead of an empty screen.

use super::model::{Agent, Folder};

/// Returns the default folder set for a fresh workspace.
pub fn default_folders() -> Vec<Folder> {
    vec![
        Folder {
            id: 1,
            name: "Sales Team".to_string(),
            theme: "sales".to_string(),
            agents: vec![
                Agent {
                    id: "101".to_string(),
                    name: "Sales Representative".to_string(),
                    description: "Focuses on acquiring new customers and closing deals"
                        .to_string(),
                    department: "Sales".to_string(),
                    avatar: "S".to_string(),
                    avatar_color: "bg-blue-100".to_string(),
                    text_color: "text-blue-700".to_string(),
                },
                Agent {
                    id: "102".to_string(),
                    name: "Sales Consultant".to_string(),
                    description: "Provides expert advice to customers on product solutions"
                        .to_string(),
                    department: "Sales".to_string(),
                    avatar: "S".to_string(),
                    avatar_color: "bg-blue-100".to_string(),
                    text_color: "text-blue-700".to_string(),
                },
            ],
        },
        Folder {
            id: 2,
            name: "Marketing Team".to_string(),
            theme: "marketing".to_string(),
            agents: vec![Agent {
                id: "201".to_string(),
                name: "Content Marketer".to_string(),
                description: "Creates engaging content for various marketing channels"
                    .to_string(),
                department: "Marketing".to_string(),
                avatar: "M".to_string(),
                avatar_color: "bg-green-100".to_string(),
                text_color: "text-green-700".to_string(),
            }],
        },
        Folder {
            id: 3,
            name: "IT Support".to_string(),
            theme: "it".to_string(),
            agents: vec![Agent {
                id: "301".to_string(),
                name: "IT Specialist".to_string(),
                description: "Provides technical support and troubleshooting".to_string(),
                department: "IT".to_string(),
                avatar: "I".to_string(),
                avatar_color: "bg-purple-100".to_string(),
                text_color: "text-purple-700".to_string(),
            }],
        },
    ]
}
