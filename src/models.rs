// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category: String,
    pub notes: String,
}

/// A purchase that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPurchase {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category: String,
    pub notes: String,
}

impl NewPurchase {
    pub fn with_id(self, id: i64) -> Purchase {
        Purchase {
            id,
            description: self.description,
            amount: self.amount,
            date: self.date,
            category: self.category,
            notes: self.notes,
        }
    }
}
