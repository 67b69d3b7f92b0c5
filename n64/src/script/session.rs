//! Statement evaluation against named bindings

use super::ast::{Expr, Stmt};
use super::error::ScriptError;
use super::parser::parse;
use super::{STACK_GROW_SIZE, STACK_RED_ZONE};
use crate::error::Error;
use crate::host::{self, Operand};
use crate::mode::Mode;
use std::collections::BTreeMap;

/// Script evaluation state
#[derive(Debug, Default)]
pub struct Session {
    bindings: BTreeMap<String, Operand>,
    mode: Mode,
}

/// A value plus the binding it still refers to, if any
struct Place {
    value: Operand,
    binding: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose `int64(..)` defaults to `mode`
    pub fn with_mode(mode: Mode) -> Self {
        Session {
            bindings: BTreeMap::new(),
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn get(&self, name: &str) -> Option<&Operand> {
        self.bindings.get(name)
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Operand)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Run every statement in `source`, returning the value of the last one.
    /// `let` statements produce no value.
    pub fn eval(&mut self, source: &str) -> Result<Option<Operand>, ScriptError> {
        let program = parse(source)?;
        let mut last = None;
        for stmt in &program {
            last = self.exec(stmt)?;
        }
        Ok(last)
    }

    fn exec(&mut self, stmt: &Stmt) -> Result<Option<Operand>, ScriptError> {
        match stmt {
            Stmt::Let { name, value, .. } => {
                let place = self.place(value)?;
                log::debug!("bind {name} = {}", place.value);
                self.bindings.insert(name.clone(), place.value);
                Ok(None)
            }
            Stmt::Expr(expr) => Ok(Some(self.place(expr)?.value)),
        }
    }

    fn place(&mut self, expr: &Expr) -> Result<Place, ScriptError> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.place_inner(expr))
    }

    fn place_inner(&mut self, expr: &Expr) -> Result<Place, ScriptError> {
        match expr {
            Expr::Literal { value, .. } => Ok(Place {
                value: value.clone(),
                binding: None,
            }),
            Expr::Var { name, span } => match self.bindings.get(name) {
                Some(value) => Ok(Place {
                    value: value.clone(),
                    binding: Some(name.clone()),
                }),
                None => Err(ScriptError::unbound(name.as_str(), *span)),
            },
            Expr::Construct { mode, args, span } => {
                let args = self.operands(args)?;
                let mut n = host::construct(&args, mode.unwrap_or(self.mode))
                    .map_err(|e| ScriptError::runtime(e, *span))?;
                // bits never depend on the mode at construction
                if let Some(mode) = mode {
                    n.set_mode(*mode);
                }
                Ok(Place {
                    value: Operand::Int64(n),
                    binding: None,
                })
            }
            Expr::Call {
                receiver,
                method,
                args,
                span,
            } => {
                let recv = self.place(receiver)?;
                let args = self.operands(args)?;
                // arguments may have mutated the receiver's binding
                let current = match recv.binding.as_ref().and_then(|name| self.bindings.get(name)) {
                    Some(value) => value.clone(),
                    None => recv.value,
                };
                let mut n = match current {
                    Operand::Int64(n) => n,
                    other => {
                        log::debug!("receiver is a {}", other.type_name());
                        let err = Error::invalid_type("receiver", "int64");
                        return Err(ScriptError::runtime(err, receiver.span()));
                    }
                };
                let value =
                    host::call(&mut n, method, &args).map_err(|e| ScriptError::runtime(e, *span))?;

                // Mutators write back so `x.iaddn(1)` changes `x`.
                match recv.binding {
                    Some(name) if host::is_mutator(method) => {
                        self.bindings.insert(name.clone(), Operand::Int64(n));
                        Ok(Place {
                            value,
                            binding: Some(name),
                        })
                    }
                    _ => Ok(Place {
                        value,
                        binding: None,
                    }),
                }
            }
        }
    }

    fn operands(&mut self, args: &[Expr]) -> Result<Vec<Operand>, ScriptError> {
        args.iter()
            .map(|arg| self.place(arg).map(|p| p.value))
            .collect()
    }
}
