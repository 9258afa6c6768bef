//! Symbolic Boolean expressions over implicant aliases
//!
//! A tiny algebra used by Petrick's method. Expressions are immutable; every
//! rewrite returns a new expression.
//!
//! - [`Expr::simplify`] puts an expression into canonical form: nested
//!   operators of the same kind are flattened, operands are deduplicated and
//!   sorted, and disjunctions drop every product absorbed by a smaller one
//!   (`a + a*b = a`).
//! - [`Expr::evaluate`] multiplies a conjunction of clauses out into a single
//!   disjunction of products, simplifying after every step.

use crate::error::{Error, Result};
use log::trace;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;

/// Non-empty operand list of a symbolic operator
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operands(Vec<Expr>);

impl Operands {
    pub fn new(operands: Vec<Expr>, operator: &'static str) -> Result<Self> {
        if operands.is_empty() {
            return Err(Error::EmptyOperands { operator });
        }
        Ok(Operands(operands))
    }

    pub fn into_vec(self) -> Vec<Expr> {
        self.0
    }
}

impl Deref for Operands {
    type Target = [Expr];

    fn deref(&self) -> &[Expr] {
        &self.0
    }
}

/// A symbolic expression
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expr {
    /// An implicant alias
    Symbol(String),
    /// Logical AND of the operands
    Conjunction(Operands),
    /// Logical OR of the operands
    Disjunction(Operands),
}

impl Expr {
    pub fn symbol(alias: impl Into<String>) -> Self {
        Expr::Symbol(alias.into())
    }

    pub fn conjunction(operands: Vec<Expr>) -> Result<Self> {
        Ok(Expr::Conjunction(Operands::new(operands, "conjunction")?))
    }

    pub fn disjunction(operands: Vec<Expr>) -> Result<Self> {
        Ok(Expr::Disjunction(Operands::new(operands, "disjunction")?))
    }

    /// Operands of an operator; a symbol is its own single operand
    pub fn operands(&self) -> &[Expr] {
        match self {
            Expr::Symbol(_) => std::slice::from_ref(self),
            Expr::Conjunction(ops) | Expr::Disjunction(ops) => ops,
        }
    }

    /// Every alias occurring in the expression
    pub fn symbols(&self) -> BTreeSet<&str> {
        let mut symbols = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expr::Symbol(alias) => {
                    symbols.insert(alias.as_str());
                }
                Expr::Conjunction(ops) | Expr::Disjunction(ops) => stack.extend(ops.iter()),
            }
        }
        symbols
    }

    /// Aliases of a product term: a symbol, or a conjunction of symbols
    pub fn product_symbols(&self) -> Option<BTreeSet<&str>> {
        match self {
            Expr::Symbol(alias) => Some(BTreeSet::from([alias.as_str()])),
            Expr::Conjunction(ops) => ops
                .iter()
                .map(|op| match op {
                    Expr::Symbol(alias) => Some(alias.as_str()),
                    _ => None,
                })
                .collect(),
            Expr::Disjunction(_) => None,
        }
    }

    /// Canonical form of the expression
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Symbol(_) => self.clone(),
            Expr::Conjunction(ops) => Expr::Conjunction(Operands(canonical(ops, |e| match e {
                Expr::Conjunction(inner) => Some(inner),
                _ => None,
            }))),
            Expr::Disjunction(ops) => {
                let operands = canonical(ops, |e| match e {
                    Expr::Disjunction(inner) => Some(inner),
                    _ => None,
                });
                Expr::Disjunction(Operands(absorb(operands)))
            }
        }
    }

    /// Multiply the expression out into a sum of products.
    ///
    /// A conjunction is distributed clause by clause from left to right; a
    /// disjunction is only simplified.
    pub fn evaluate(&self) -> Expr {
        match self {
            Expr::Symbol(_) => self.clone(),
            Expr::Disjunction(_) => self.simplify(),
            Expr::Conjunction(clauses) => distribute(clauses),
        }
    }

    /// Products of the expression as a flat list
    fn sum_of_products(&self) -> Vec<Expr> {
        match self {
            Expr::Symbol(_) => vec![self.clone()],
            Expr::Disjunction(ops) => ops.iter().flat_map(Expr::sum_of_products).collect(),
            Expr::Conjunction(_) => match self.evaluate() {
                Expr::Disjunction(ops) => ops.into_vec(),
                other => vec![other],
            },
        }
    }
}

/// Simplify every operand, splice in operands of nested operators of the same
/// kind, then deduplicate and sort
fn canonical<F>(operands: &Operands, nested: F) -> Vec<Expr>
where
    F: Fn(&Expr) -> Option<&Operands>,
{
    let mut canonical = BTreeSet::new();
    for op in operands.iter() {
        let op = op.simplify();
        if let Some(inner) = nested(&op) {
            canonical.extend(inner.iter().cloned());
            continue;
        }
        canonical.insert(op);
    }
    canonical.into_iter().collect()
}

/// Drop every product whose aliases are a superset of another product's
fn absorb(terms: Vec<Expr>) -> Vec<Expr> {
    let products: Vec<Option<BTreeSet<&str>>> = terms.iter().map(Expr::product_symbols).collect();

    let absorbed: Vec<bool> = products
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let Some(product) = product else {
                return false;
            };
            products.iter().enumerate().any(|(j, other)| match other {
                Some(other) if j != i => {
                    other.is_subset(product) && (other.len() < product.len() || j < i)
                }
                _ => false,
            })
        })
        .collect();

    terms
        .into_iter()
        .zip(absorbed)
        .filter(|(_, absorbed)| !absorbed)
        .map(|(term, _)| term)
        .collect()
}

/// Left fold of the distributive law over the clauses of a conjunction
fn distribute(clauses: &Operands) -> Expr {
    let mut products: Option<Vec<Expr>> = None;

    for (step, clause) in clauses.iter().enumerate() {
        let rhs = clause.sum_of_products();
        let terms = match products.take() {
            None => rhs,
            Some(lhs) => {
                let mut terms = Vec::with_capacity(lhs.len() * rhs.len());
                for l in &lhs {
                    for r in &rhs {
                        terms.push(Expr::Conjunction(Operands(vec![l.clone(), r.clone()])).simplify());
                    }
                }
                terms
            }
        };

        let simplified = Expr::Disjunction(Operands(terms)).simplify();
        trace!(
            "distribution step {}: {} products",
            step,
            simplified.operands().len()
        );
        products = Some(match simplified {
            Expr::Disjunction(ops) => ops.into_vec(),
            other => vec![other],
        });
    }

    Expr::Disjunction(Operands(products.unwrap_or_default()))
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(alias) => f.write_str(alias),
            Expr::Conjunction(ops) => {
                let parts: Vec<String> = ops.iter().map(|op| op.to_string()).collect();
                f.write_str(&parts.join("*"))
            }
            Expr::Disjunction(ops) if ops.len() == 1 => write!(f, "{}", ops[0]),
            Expr::Disjunction(ops) => {
                let parts: Vec<String> = ops.iter().map(|op| op.to_string()).collect();
                write!(f, "({})", parts.join(" + "))
            }
        }
    }
}
