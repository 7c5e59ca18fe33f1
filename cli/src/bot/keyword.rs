//! # Keyword Responder
//!
//! File: cli/src/bot/keyword.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The rule-based customer-support bot. A message is lowercased and checked
//! against an ordered table of trigger phrases; the first rule with a trigger
//! contained in the message wins. Nothing is remembered between calls, so the
//! same `(message, context)` pair always produces the same reply.
//!
//! ## Rule Order
//!
//! Earlier rules shadow later ones. The greeting rule comes first, so any
//! message containing "hello" or "hi" is answered with the greeting (this
//! includes words such as "this" or "shipping", since matching is by
//! substring). After that, multi-word phrases are listed before the single
//! keywords they contain: "how to return an item" must precede "return" and
//! "account help" must precede "help", or those rules could never fire.
//!
//! ## Return Follow-ups
//!
//! When the previous reply offered help with a return, the caller passes
//! `Context::ReturnProcess`. A "yes" or "no" in the next message is then
//! answered directly; anything else falls through to the table.
//!
use crate::bot::Context;

pub const GREETING_RESPONSE: &str = "Hello! How can I assist you with your order today?";
pub const RETURN_PROMPT_RESPONSE: &str = "You can return your item within 30 days for a full refund. Do you need assistance with the return process?";
pub const RETURN_GUIDANCE_RESPONSE: &str = "Please specify the item you'd like to return, and I can guide you through the return process.";
pub const RETURN_DECLINED_RESPONSE: &str = "Okay! If you have any other questions or need further assistance, just let me know!";
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I didn't understand that. Can you please rephrase your question or ask about your order status, returns, or general inquiries?";

/// Replies containing this phrase put the next turn into `Context::ReturnProcess`.
const RETURN_OFFER_MARKER: &str = "need assistance with the return process";

struct KeywordRule {
    triggers: &'static [&'static str],
    response: &'static str,
}

const RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["hello", "hi"],
        response: GREETING_RESPONSE,
    },
    KeywordRule {
        triggers: &["how to return an item"],
        response: "To return an item, please package it securely, include the invoice, and send it back to us using the provided label.",
    },
    KeywordRule {
        triggers: &["item not received"],
        response: "I'm sorry to hear that! Could you please provide your order number so I can check its status?",
    },
    KeywordRule {
        triggers: &["missing item"],
        response: "I apologize for the inconvenience. Please share your order number, and I'll look into it for you.",
    },
    KeywordRule {
        triggers: &["order status"],
        response: "Please provide your order number to check the status.",
    },
    KeywordRule {
        triggers: &["change order"],
        response: "If you would like to change your order, please provide your order number and the changes you wish to make.",
    },
    KeywordRule {
        triggers: &["cancel order"],
        response: "To cancel your order, please provide your order number, and I can assist you with the cancellation process.",
    },
    KeywordRule {
        triggers: &["payment issue"],
        response: "If you're having a payment issue, please check your payment method. Would you like me to help you troubleshoot?",
    },
    KeywordRule {
        triggers: &["account help"],
        response: "For account-related issues, please describe the problem, and I'll do my best to assist you.",
    },
    KeywordRule {
        triggers: &["thank you"],
        response: "You're welcome! If you have any more questions, feel free to ask.",
    },
    KeywordRule {
        triggers: &["return", "refund"],
        response: RETURN_PROMPT_RESPONSE,
    },
    KeywordRule {
        triggers: &["help"],
        response: "Sure! What specific issue are you facing? I'd be happy to assist with returns, refunds, or tracking.",
    },
    KeywordRule {
        triggers: &["track"],
        response: "Please provide your tracking number, and I can help you track your order.",
    },
    KeywordRule {
        triggers: &["bye", "goodbye"],
        response: "Goodbye! Have a great day!",
    },
    KeywordRule {
        triggers: &["discount", "coupon"],
        response: "You can use special discount codes during checkout. If you have any specific code, please enter it!",
    },
];

/// Stateless rule-based responder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeywordResponder;

impl KeywordResponder {
    pub fn new() -> Self {
        Self
    }

    /// Picks the canned reply for `message`, taking the follow-up `context` into account.
    pub fn respond(&self, message: &str, context: Option<Context>) -> &'static str {
        let message = message.to_lowercase();

        if context == Some(Context::ReturnProcess) {
            if message.contains("yes") {
                return RETURN_GUIDANCE_RESPONSE;
            }
            if message.contains("no") {
                return RETURN_DECLINED_RESPONSE;
            }
        }

        RULES
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| message.contains(t)))
            .map(|rule| rule.response)
            .unwrap_or(FALLBACK_RESPONSE)
    }
}

/// Context for the turn that follows `response`.
pub fn context_after(response: &str) -> Option<Context> {
    if response.contains(RETURN_OFFER_MARKER) {
        Some(Context::ReturnProcess)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responds_to_greetings() {
        let bot = KeywordResponder::new();
        for message in ["hello", "HELLO there", "hi", "Hi, I need something", "oh hi!"] {
            assert_eq!(bot.respond(message, None), GREETING_RESPONSE, "{}", message);
        }
    }

    #[test]
    fn greeting_shadows_everything_after_it() {
        // "this" contains "hi", so the greeting wins over "return".
        let bot = KeywordResponder::new();
        assert_eq!(bot.respond("can I return this", None), GREETING_RESPONSE);
    }

    #[test]
    fn specific_phrases_win_over_single_keywords() {
        let bot = KeywordResponder::new();
        assert!(bot
            .respond("how to return an item?", None)
            .starts_with("To return an item, please package it securely"));
        assert!(bot
            .respond("I need account help", None)
            .starts_with("For account-related issues"));
        assert_eq!(bot.respond("I want a refund", None), RETURN_PROMPT_RESPONSE);
        assert!(bot.respond("help", None).starts_with("Sure! What specific issue"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let bot = KeywordResponder::new();
        assert_eq!(
            bot.respond("What is my ORDER STATUS", None),
            "Please provide your order number to check the status."
        );
        assert_eq!(bot.respond("GOODBYE", None), "Goodbye! Have a great day!");
        assert!(bot.respond("Got a Coupon code", None).starts_with("You can use special discount codes"));
    }

    #[test]
    fn return_process_yes_and_no() {
        let bot = KeywordResponder::new();
        let ctx = Some(Context::ReturnProcess);
        assert_eq!(bot.respond("yes please", ctx), RETURN_GUIDANCE_RESPONSE);
        assert_eq!(bot.respond("No", ctx), RETURN_DECLINED_RESPONSE);
        // "yes" is checked before "no".
        assert_eq!(bot.respond("yes, no, maybe", ctx), RETURN_GUIDANCE_RESPONSE);
    }

    #[test]
    fn return_process_falls_through_to_table() {
        let bot = KeywordResponder::new();
        let ctx = Some(Context::ReturnProcess);
        assert!(bot
            .respond("track my parcel", ctx)
            .starts_with("Please provide your tracking number"));
        assert_eq!(bot.respond("maybe later", ctx), FALLBACK_RESPONSE);
    }

    #[test]
    fn yes_without_context_is_not_special() {
        let bot = KeywordResponder::new();
        assert_eq!(bot.respond("yes", None), FALLBACK_RESPONSE);
    }

    #[test]
    fn unknown_and_empty_input_fall_back() {
        let bot = KeywordResponder::new();
        assert_eq!(bot.respond("what is the weather", None), FALLBACK_RESPONSE);
        assert_eq!(bot.respond("", None), FALLBACK_RESPONSE);
    }

    #[test]
    fn respond_is_pure() {
        let bot = KeywordResponder::new();
        let first = bot.respond("return", None);
        for _ in 0..3 {
            assert_eq!(bot.respond("return", None), first);
        }
        assert_eq!(bot, KeywordResponder::new());
    }

    #[test]
    fn context_follows_return_offer() {
        assert_eq!(
            context_after(RETURN_PROMPT_RESPONSE),
            Some(Context::ReturnProcess)
        );
        assert_eq!(context_after(GREETING_RESPONSE), None);
        assert_eq!(context_after(RETURN_GUIDANCE_RESPONSE), None);
    }
}
