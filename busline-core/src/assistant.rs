//! Keyword-matching chat assistant. No model behind it: it scans the question
//! for topic keywords and known city names and answers from the route list.

use crate::models::Route;

const SCHEDULE_KEYWORDS: &[&str] = &["schedule", "when", "time", "depart"];
const PRICE_KEYWORDS: &[&str] = &["price", "cost", "how much", "fare"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi ", "good morning", "good afternoon"];
const THANKS_KEYWORDS: &[&str] = &["thank", "thanks"];

fn mentions_any(question: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| question.contains(keyword))
}

fn mentioned_city<'a>(question: &str, routes: &'a [Route]) -> Option<&'a str> {
    routes
        .iter()
        .flat_map(|route| [route.origin.as_str(), route.destination.as_str()])
        .find(|city| question.contains(&city.to_lowercase()))
}

fn routes_through<'a>(city: &str, routes: &'a [Route]) -> Vec<&'a Route> {
    routes
        .iter()
        .filter(|route| route.origin.eq_ignore_ascii_case(city) || route.destination.eq_ignore_ascii_case(city))
        .collect()
}

/// Compose a reply to a free-text question using the current route list.
#[must_use]
pub fn reply(question: &str, routes: &[Route]) -> String {
    let question = question.to_lowercase();

    if mentions_any(&question, SCHEDULE_KEYWORDS) {
        if routes.is_empty() {
            return "I have no schedule information right now. Please check with an operator."
                .to_string();
        }
        if let Some(city) = mentioned_city(&question, routes) {
            let relevant = routes_through(city, routes);
            if !relevant.is_empty() {
                let mut answer = format!("Here is what I found for routes through {city}:\n\n");
                for route in relevant {
                    answer.push_str(&format!(
                        "• {}: travel time {}, {} {}\n",
                        route.name, route.duration, route.price, route.currency
                    ));
                }
                return answer;
            }
        }
        return format!(
            "We run {} routes. Ask about a specific city, for example \"When is the bus to Warsaw?\", or open the Schedule tab.",
            routes.len()
        );
    }

    if mentions_any(&question, PRICE_KEYWORDS) {
        if let Some(city) = mentioned_city(&question, routes) {
            let relevant = routes_through(city, routes);
            if !relevant.is_empty() {
                let mut answer = format!("Ticket prices for routes through {city}:\n\n");
                for route in relevant {
                    answer.push_str(&format!(
                        "• {}: {} {}\n",
                        route.name, route.price, route.currency
                    ));
                }
                return answer;
            }
        }
        return "Ticket prices depend on the destination. Check the Prices tab or ask about a specific route.".to_string();
    }

    if mentions_any(&question, GREETING_KEYWORDS) {
        return "Hello! How can I help? You can ask me about schedules, prices or routes."
            .to_string();
    }

    if mentions_any(&question, THANKS_KEYWORDS) {
        return "Happy to help! Come back any time you have more questions.".to_string();
    }

    "I can answer questions about schedules, routes and ticket prices. Could you rephrase your question?".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::demo_routes;

    #[test]
    fn schedule_question_with_city_lists_matching_routes() {
        let answer = reply("When is the bus to Warsaw?", &demo_routes());
        assert!(answer.contains("Minsk – Warsaw"));
        assert!(answer.contains("06:15"));
        assert!(!answer.contains("Riga"));
    }

    #[test]
    fn schedule_question_without_city_gives_the_overview() {
        let answer = reply("what is the schedule like", &demo_routes());
        assert!(answer.contains("4 routes"));
    }

    #[test]
    fn price_question_with_city_lists_prices() {
        let answer = reply("how much is a ticket to Riga", &demo_routes());
        assert!(answer.contains("Minsk – Riga"));
        assert!(answer.contains("70"));
    }

    #[test]
    fn greeting_and_fallback() {
        assert!(reply("hello there", &demo_routes()).starts_with("Hello!"));
        assert!(reply("qwerty", &demo_routes()).contains("rephrase"));
        assert!(reply("thanks a lot", &demo_routes()).starts_with("Happy to help"));
    }

    #[test]
    fn empty_route_list_is_not_an_error() {
        let answer = reply("when does the bus leave", &[]);
        assert!(answer.contains("no schedule information"));
    }
}
