//! Width constraints held by menu items.

/// How a constrained width relates to its constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The width is exactly the constant.
    Equal,
    /// The width is at least the constant and may grow to fit content.
    GreaterThanOrEqual,
}

/// A width constraint on a label or on the item itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthConstraint {
    pub relation: Relation,
    pub constant: f32,
}

impl WidthConstraint {
    pub const fn equal(constant: f32) -> Self {
        Self {
            relation: Relation::Equal,
            constant,
        }
    }

    pub const fn at_least(constant: f32) -> Self {
        Self {
            relation: Relation::GreaterThanOrEqual,
            constant,
        }
    }

    /// Replace the constant, keeping the relation.
    pub fn set_constant(&mut self, constant: f32) {
        self.constant = constant;
    }

    /// Whether `width` satisfies the constraint.
    pub fn is_satisfied_by(&self, width: f32) -> bool {
        match self.relation {
            Relation::Equal => width == self.constant,
            Relation::GreaterThanOrEqual => width >= self.constant,
        }
    }

    /// The width chosen for content whose natural width is `natural`.
    pub fn resolve(&self, natural: f32) -> f32 {
        match self.relation {
            Relation::Equal => self.constant,
            Relation::GreaterThanOrEqual => natural.max(self.constant),
        }
    }
}
