//! The interpreter: operand stack, word dictionary, and value dispatch.

use std::rc::Rc;

use rill_diagnostic::Diagnostic;
use rill_dict::{Dict, DictError};
use rill_stack::{Stack, StackError};
use rill_value::{Value, ValueKind};
use tracing::trace;

use crate::program::{NativeFn, Program};


/// Interpreter state for a Rill session.
///
/// One `Interpreter` lives for the whole session. Executing a value mutates
/// the operand stack and, for definitions, the dictionary. Execution errors
/// are reported as [`Diagnostic`] values; after any error the interpreter is
/// left consistent and can keep executing.
pub struct Interpreter {
    stack: Stack<Value>,
    dict: Dict<Program>,
}

impl Interpreter {
    /// Creates an interpreter with an empty stack and an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
            dict: Dict::new(),
        }
    }

    /// Executes a single value.
    ///
    /// Integers are pushed onto the operand stack. Words are dispatched:
    /// built-ins first, then the dictionary, otherwise
    /// [`Diagnostic::UnknownWord`].
    pub fn execute(&mut self, value: Value) -> Result<(), Diagnostic> {
        trace!(?value, "execute");
        match value {
            Value::Int(_) => self.push(value),
            Value::Word(name) => self.execute_word(&name),
        }
    }

    fn execute_word(&mut self, name: &str) -> Result<(), Diagnostic> {
        match name {
            "+" => self.builtin_add(),
            "drop" => self.builtin_drop(),
            "clear" => {
                self.stack.clear();
                Ok(())
            }
            _ => match self.dict.lookup(name) {
                Some(program) => self.execute_defined(program.clone()),
                None => Err(Diagnostic::UnknownWord {
                    name: name.to_owned(),
                }),
            },
        }
    }

    /// Runs a defined word's program.
    ///
    /// Interpreted bodies replay their values in order; the first failing
    /// value aborts the rest of the body and its diagnostic propagates to
    /// the caller.
    fn execute_defined(&mut self, program: Program) -> Result<(), Diagnostic> {
        match program {
            Program::Native(native) => native(self),
            Program::Interpreted(body) => {
                for value in body.iter() {
                    self.execute(value.clone())?;
                }
                Ok(())
            }
        }
    }

    fn builtin_drop(&mut self) -> Result<(), Diagnostic> {
        self.pop_operand("drop", 1).map(|_| ())
    }

    /// `+`: pops two operands and pushes their wrapping sum.
    ///
    /// Arity is checked before anything is popped, so a too-shallow stack
    /// is reported with its actual depth and left untouched. On a type
    /// mismatch both operands are pushed back in their original order
    /// before the diagnostic is returned.
    fn builtin_add(&mut self) -> Result<(), Diagnostic> {
        let depth = self.stack.len();
        if depth < 2 {
            return Err(Diagnostic::NotEnoughArguments {
                word: "+".to_owned(),
                min_arity: 2,
                actual: depth,
            });
        }
        let value1 = self.pop_operand("+", 2)?;
        let value2 = self.pop_operand("+", 2)?;

        match (&value1, &value2) {
            (&Value::Int(a), &Value::Int(b)) => self.push(Value::Int(b.wrapping_add(a))),
            _ => {
                let actual = vec![value2.kind(), value1.kind()];
                self.push(value2)?;
                self.push(value1)?;
                Err(Diagnostic::TypeMismatch {
                    expected: vec![ValueKind::Int, ValueKind::Int],
                    actual,
                })
            }
        }
    }

    /// Pops one operand for a word with the given minimum arity, turning an
    /// empty stack into [`Diagnostic::NotEnoughArguments`].
    fn pop_operand(&mut self, word: &str, min_arity: usize) -> Result<Value, Diagnostic> {
        self.stack.pop().map_err(|error| match error {
            StackError::Empty => Diagnostic::NotEnoughArguments {
                word: word.to_owned(),
                min_arity,
                actual: self.stack.len(),
            },
            StackError::Alloc => Diagnostic::AllocationFailure,
        })
    }

    fn push(&mut self, value: Value) -> Result<(), Diagnostic> {
        self.stack.push(value).map_err(|_| Diagnostic::AllocationFailure)
    }

    /// Defines `name` as an interpreted word that replays `body` in order.
    ///
    /// Redefinition replaces the previous program under the same name.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        body: impl Into<Rc<[Value]>>,
    ) -> Result<(), Diagnostic> {
        self.insert(name.into(), Program::Interpreted(body.into()))
    }

    /// Defines `name` as a native word.
    pub fn define_native(
        &mut self,
        name: impl Into<String>,
        native: NativeFn,
    ) -> Result<(), Diagnostic> {
        self.insert(name.into(), Program::Native(native))
    }

    fn insert(&mut self, name: String, program: Program) -> Result<(), Diagnostic> {
        trace!(name, "define word");
        self.dict.insert(name, program).map_err(|error| match error {
            DictError::Alloc => Diagnostic::AllocationFailure,
            DictError::NotImplemented => Diagnostic::NotImplemented {
                operation: "insert",
            },
        })
    }

    /// Removes a word definition.
    ///
    /// Dictionary deletion is not implemented yet, so this always reports
    /// [`Diagnostic::NotImplemented`].
    pub fn undefine(&mut self, name: &str) -> Result<(), Diagnostic> {
        self.dict
            .delete(name)
            .map(|_| ())
            .map_err(|error| match error {
                DictError::NotImplemented => Diagnostic::NotImplemented {
                    operation: "delete",
                },
                DictError::Alloc => Diagnostic::AllocationFailure,
            })
    }

    /// The operand stack, top first.
    #[must_use]
    pub fn stack(&self) -> &Stack<Value> {
        &self.stack
    }

    /// Mutable access to the operand stack, for native words and tests.
    pub fn stack_mut(&mut self) -> &mut Stack<Value> {
        &mut self.stack
    }

    /// The word dictionary.
    #[must_use]
    pub fn dict(&self) -> &Dict<Program> {
        &self.dict
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
