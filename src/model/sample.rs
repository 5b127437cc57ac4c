//! Built-in sample dataset shown when no forest file is given.

use super::node::{Node, NodeId};

/// Ids expanded on first render of the sample forest.
pub const DEFAULT_EXPANDED: [NodeId; 7] = [
    NodeId(1),
    NodeId(2),
    NodeId(3),
    NodeId(4),
    NodeId(21),
    NodeId(22),
    NodeId(23),
];

/// Ids selected on first render of the sample forest.
pub const DEFAULT_SELECTED: [NodeId; 1] = [NodeId(23)];

/// Number of generated entries under "Q1 Report".
pub const REPORT_ITEM_COUNT: u64 = 100;

/// First id of the generated "Q1 Report" entries.
pub const REPORT_ITEM_BASE_ID: u64 = 1000;

pub fn sample_nodes() -> Vec<Node> {
    let report_items = (0..REPORT_ITEM_COUNT)
        .map(|index| Node::leaf(REPORT_ITEM_BASE_ID + index, format!("Item {}", index + 1)))
        .collect();

    vec![
        Node::branch(
            1,
            "Work",
            vec![
                Node::branch(
                    2,
                    "Reports",
                    vec![Node::branch(
                        3,
                        "2023",
                        vec![Node::branch(4, "Q1 Report", report_items)],
                    )],
                ),
                Node::branch(
                    7,
                    "Presentations",
                    vec![Node::branch(
                        8,
                        "2023 Projects",
                        vec![
                            Node::branch(
                                9,
                                "Project A",
                                vec![Node::leaf(10, "Draft"), Node::leaf(11, "Final")],
                            ),
                            Node::branch(12, "Project B", vec![Node::leaf(13, "Research")]),
                        ],
                    )],
                ),
            ],
        ),
        Node::branch(
            14,
            "Personal",
            vec![Node::branch(
                15,
                "Hobbies",
                vec![
                    Node::branch(
                        16,
                        "Photography",
                        vec![Node::leaf(17, "Travel"), Node::leaf(18, "Portraits")],
                    ),
                    Node::branch(19, "Cooking", vec![Node::leaf(20, "Recipes")]),
                ],
            )],
        ),
        Node::branch(
            21,
            "Projects",
            vec![
                Node::branch(
                    22,
                    "Web Development",
                    vec![
                        Node::branch(
                            23,
                            "Portfolio",
                            vec![Node::leaf(24, "Images"), Node::leaf(25, "CSS")],
                        ),
                        Node::leaf(26, "Landing Page"),
                    ],
                ),
                Node::branch(27, "Mobile Apps", vec![Node::leaf(28, "Weather App")]),
            ],
        ),
        Node::branch(
            29,
            "Finance",
            vec![Node::branch(
                30,
                "Budget",
                vec![Node::branch(
                    31,
                    "2023",
                    vec![Node::leaf(32, "January"), Node::leaf(33, "February")],
                )],
            )],
        ),
        Node::branch(
            34,
            "Health",
            vec![
                Node::branch(
                    35,
                    "Fitness",
                    vec![Node::leaf(36, "Workouts"), Node::leaf(37, "Nutrition")],
                ),
                Node::leaf(38, "Wellness"),
            ],
        ),
    ]
}
