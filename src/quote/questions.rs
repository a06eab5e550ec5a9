use serde::Serialize;

const HELP_PHONE: &str = "0330 113 1333";
const IMAGE_BASE: &str =
    "https://origin-gph.com/wp-content/themes/generatepress_child/boiler-setup/quote-img";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    pub options: Vec<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_phone: Option<&'static str>,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

fn opt(value: &'static str, label: &'static str) -> AnswerOption {
    AnswerOption {
        value,
        label,
        image: None,
    }
}

fn pictured(value: &'static str, label: &'static str, image: &str) -> AnswerOption {
    AnswerOption {
        value,
        label,
        image: Some(format!("{}/{}", IMAGE_BASE, image)),
    }
}

/// The fixed question sequence, in the order it is asked.
pub fn catalog() -> Vec<Question> {
    vec![
        Question {
            id: "boiler-fuel",
            question: "Which fuel powers your boiler?",
            hint: None,
            options: vec![
                pictured("mains-gas", "Mains Gas", "mains-gas_1.png"),
                pictured("lpg", "LPG", "lpg.png"),
                pictured("other", "Other", "unknown.png"),
                pictured("other-2", "Other 2", "unknown.png"),
            ],
            info: Some("Mains gas boilers are most common across the UK. If you have a gas meter, a gas bill, or a gas cooker, your boiler probably runs on gas."),
            help_phone: Some(HELP_PHONE),
        },
        Question {
            id: "boiler-type-known",
            question: "Do you know what type of boiler you currently have?",
            hint: Some("Like, a combi boiler, regular boiler etc"),
            options: vec![opt("yes", "Yes, I know"), opt("no", "No, I'm not sure")],
            info: Some("If you know, select yes. If you don't, select that you're not sure and we'll figure it out for you in the next step."),
            help_phone: Some(HELP_PHONE),
        },
        Question {
            id: "boiler-type",
            question: "Which type of boiler do you currently have?",
            hint: None,
            options: vec![
                opt("combi", "Combi boiler"),
                opt("regular", "Regular/Standard boiler"),
                opt("system", "System boiler"),
                opt("back", "Back boiler"),
            ],
            info: Some("Combi boilers are the most common type of boiler in the UK. Regular/system boilers have separate tanks/cylinders, and back boilers are found behind fireplaces."),
            help_phone: None,
        },
        Question {
            id: "same-location",
            question: "Do you want to keep boiler in the same place?",
            hint: None,
            options: vec![opt("yes", "Yes, I do"), opt("no", "No, I want to move it")],
            info: Some("Boiler relocations can be quite tricky, making your job more costly and complex. If you wish to relocate it, select no, and you'll see the pricing options on the next page."),
            help_phone: None,
        },
        Question {
            id: "property-type",
            question: "Which type of property do you have?",
            hint: None,
            options: vec![
                opt("house", "A house"),
                opt("bungalow", "A bungalow"),
                opt("flat", "A flat/apartment"),
            ],
            info: Some("This helps us to size your boiler, and also understand access for things such as your boiler's flue."),
            help_phone: None,
        },
        Question {
            id: "bathrooms",
            question: "How many bathrooms does your home have?",
            hint: None,
            options: vec![
                opt("1", "1 bathroom"),
                opt("2", "2 bathrooms"),
                opt("3", "3 bathrooms"),
                opt("4+", "4+ bathrooms"),
            ],
            info: Some("This helps us to calculate the required power for your new boiler. The more bathrooms you have, the more powerful your boiler will need to be."),
            help_phone: None,
        },
        Question {
            id: "bedrooms",
            question: "How many bedrooms does your home have?",
            hint: None,
            options: vec![
                opt("1", "1 bedroom"),
                opt("2", "2 bedrooms"),
                opt("3", "3 bedrooms"),
                opt("4+", "4+ bedrooms"),
            ],
            info: Some("This helps us to understand the size of your home, which then helps our system to size your boiler correctly."),
            help_phone: None,
        },
        Question {
            id: "wall-flue",
            question: "Does your boiler's flue go out of the wall?",
            hint: Some("It'll look a little something like this..."),
            options: vec![opt("yes", "Yes, it does"), opt("no", "No, it doesn't")],
            info: Some("Most flues go horizontally, out of the wall. They can either be round tubes popping out (modern, fanned flue), or, square shaped ones (balanced flue). Don't confuse your flue with your chimney."),
            help_phone: None,
        },
        Question {
            id: "flue-distance",
            question: "Is your flue more than 30cm away from an opening window, or door?",
            hint: Some("Flue distance"),
            options: vec![opt("yes", "Yes, it is"), opt("no", "No, it isn't")],
            info: Some("This includes any opening, like vents, doors, or opening windows. If it's near a window that doesn't open, select no."),
            help_phone: None,
        },
        Question {
            id: "water-meter",
            question: "Does your home have a water meter?",
            hint: None,
            options: vec![opt("yes", "Yes, it does"), opt("no", "No, it doesn't")],
            info: Some("If you have a water meter, you'll pay for the water you use, rather than a fixed monthly cost on your bill"),
            help_phone: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique_and_ordered() {
        let questions = catalog();
        assert_eq!(questions.len(), 10);
        assert_eq!(questions.first().unwrap().id, "boiler-fuel");
        assert_eq!(questions.last().unwrap().id, "water-meter");
        let ids: HashSet<_> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn every_question_has_options() {
        for question in catalog() {
            assert!(question.options.len() >= 2, "{} has too few options", question.id);
        }
    }

    #[test]
    fn option_lookup() {
        let questions = catalog();
        let fuel = &questions[0];
        assert_eq!(fuel.option("lpg").unwrap().label, "LPG");
        assert!(fuel.option("lpg").unwrap().image.as_deref().unwrap().ends_with("/lpg.png"));
        assert!(fuel.option("coal").is_none());
    }
}
