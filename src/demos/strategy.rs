//! Strategy: the cart's payment method is swapped at runtime without touching
//! checkout.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait PaymentStrategy {
    fn pay(&self, amount: f64, out: &mut Output) -> fmt::Result;
}

pub struct CreditCardPayment {
    card_number: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self { card_number: card_number.into() }
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: f64, out: &mut Output) -> fmt::Result {
        writeln!(out, "Paid ${:?} using Credit Card (Card Number: {})", amount, self.card_number)
    }
}

pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: f64, out: &mut Output) -> fmt::Result {
        writeln!(out, "Paid ${:?} using PayPal (Email: {})", amount, self.email)
    }
}

#[derive(Default)]
pub struct ShoppingCart {
    payment: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.payment = Some(strategy);
    }

    pub fn checkout(&self, amount: f64, out: &mut Output) -> fmt::Result {
        match &self.payment {
            Some(strategy) => strategy.pay(amount, out),
            None => writeln!(out, "No payment method selected."),
        }
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let mut cart = ShoppingCart::new();

    cart.set_payment_strategy(Box::new(CreditCardPayment::new("3333-1234-3333-1234")));
    cart.checkout(100.0, out)?;

    cart.set_payment_strategy(Box::new(PayPalPayment::new("paulocanale@me.com")));
    cart.checkout(333.0, out)?;
    Ok(())
}
