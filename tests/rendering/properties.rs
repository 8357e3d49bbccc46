#[cfg(test)]
mod verify {
    use stylevars::dictionary::*;
    use stylevars::formatting::*;
    use stylevars::ordering::CycleError;

    fn trim(text: &str) -> &str {
        text.trim_start_matches('\n')
            .trim_end()
    }

    fn lines(text: &str) -> Vec<&str> {
        if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n')
                .collect()
        }
    }

    fn index_of(listing: &str, name: &str) -> usize {
        let needle = format!("${}:", name);
        lines(listing)
            .iter()
            .position(|line| line.starts_with(&needle))
            .unwrap_or_else(|| panic!("{} not declared in:\n{}", name, listing))
    }

    /// A palette where aliases appear before what they alias, as tends to
    /// happen when tokens are grouped by category.
    fn palette() -> Dictionary {
        vec![
            Token::new(&["button", "background"], "#0a84ff").with_original("{color.brand}"),
            Token::new(&["color", "brand"], "#0a84ff").with_original("{color.blue.500.value}"),
            Token::new(&["size", "gutter"], "16px"),
            Token::new(&["color", "blue", "500"], "#0a84ff"),
            Token::new(&["button", "border"], "1px solid #0a84ff")
                .with_original("1px solid {button.background}"),
            Token::new(&["size", "radius"], "4px"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn specification_example() {
        let dictionary = Dictionary::new(vec![
            Token::new(&["color", "base"], "#fff"),
            Token::new(&["color", "brand"], "#fff").with_reference("color-base"),
        ]);

        let result = render_variables(Dialect::Sass, &dictionary, true).unwrap();
        assert_eq!(
            result,
            trim(
                r#"
$color-base: #fff;
$color-brand: $color-base;
                "#
            )
        );

        let result = render_variables(Dialect::Sass, &dictionary, false).unwrap();
        assert_eq!(
            result,
            trim(
                r#"
$color-base: #fff;
$color-brand: #fff;
                "#
            )
        );
    }

    #[test]
    fn rendering_leaves_dictionary_alone() {
        let dictionary = palette();
        let before = dictionary
            .tokens()
            .to_vec();

        let first = render_variables(Dialect::Sass, &dictionary, true).unwrap();
        let plain = render_variables(Dialect::Sass, &dictionary, false).unwrap();
        let second = render_variables(Dialect::Sass, &dictionary, true).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, plain);
        assert_eq!(dictionary.tokens(), before.as_slice());
    }

    #[test]
    fn without_references_order_is_unchanged() {
        let dictionary = palette();
        let result = render_variables(Dialect::Sass, &dictionary, false).unwrap();

        assert_eq!(
            result,
            trim(
                r#"
$button-background: #0a84ff;
$color-brand: #0a84ff;
$size-gutter: 16px;
$color-blue-500: #0a84ff;
$button-border: 1px solid #0a84ff;
$size-radius: 4px;
                "#
            )
        );
    }

    #[test]
    fn referenced_tokens_declared_first() {
        let dictionary = palette();
        let result = render_variables(Dialect::Sass, &dictionary, true).unwrap();

        // direct references
        assert!(index_of(&result, "color-brand") < index_of(&result, "button-background"));
        assert!(index_of(&result, "button-background") < index_of(&result, "button-border"));

        // and transitively
        assert!(index_of(&result, "color-blue-500") < index_of(&result, "color-brand"));
        assert!(index_of(&result, "color-blue-500") < index_of(&result, "button-border"));

        assert_eq!(
            result,
            trim(
                r#"
$size-gutter: 16px;
$color-blue-500: #0a84ff;
$color-brand: $color-blue-500;
$button-background: $color-brand;
$button-border: 1px solid $button-background;
$size-radius: 4px;
                "#
            )
        );
    }

    #[test]
    fn unrelated_tokens_keep_relative_order() {
        let dictionary = palette();

        for references in [false, true] {
            let result = render_variables(Dialect::Sass, &dictionary, references).unwrap();
            assert!(index_of(&result, "size-gutter") < index_of(&result, "size-radius"));
        }
    }

    #[test]
    fn long_chain_in_reverse() {
        let mut tokens = Vec::new();
        for i in 0..20 {
            let name = format!("step{}", i);
            let next = format!("{{step{}}}", i + 1);
            tokens.push(Token::new(&[name.as_str()], "0").with_original(&next));
        }
        tokens.push(Token::new(&["step20"], "0"));
        let dictionary = Dictionary::new(tokens);

        let result = render_variables(Dialect::Less, &dictionary, true).unwrap();
        let names: Vec<&str> = lines(&result)
            .iter()
            .map(|line| {
                line.trim_start_matches('@')
                    .split(':')
                    .next()
                    .unwrap_or("")
            })
            .collect();

        let expected: Vec<String> = (0..=20)
            .rev()
            .map(|i| format!("step{}", i))
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn join_semantics() {
        let empty = Dictionary::default();
        assert_eq!(render_variables(Dialect::Css, &empty, false), Ok(String::new()));

        let blank = Dictionary::new(vec![Token::new(&["a"], ""), Token::new(&["b"], "")]);
        assert_eq!(render_variables(Dialect::Css, &blank, true), Ok(String::new()));

        let three = Dictionary::new(vec![
            Token::new(&["a"], "1"),
            Token::new(&["b"], ""),
            Token::new(&["c"], "3"),
            Token::new(&["d"], "4"),
        ]);
        let result = render_variables(Dialect::Css, &three, false).unwrap();
        assert_eq!(result, "  --a: 1;\n  --c: 3;\n  --d: 4;");
        assert!(!result.starts_with('\n'));
        assert!(!result.ends_with('\n'));
    }

    struct Failing;

    impl Declare for Failing {
        fn declare(&self, token: &Token, _context: &Context<'_>) -> Result<Option<String>, RenderError> {
            if token.name == "bad" {
                Err(RenderError::UnknownReference {
                    token: token
                        .name
                        .clone(),
                    reference: "elsewhere".to_string(),
                })
            } else {
                Ok(Some(
                    token
                        .name
                        .clone(),
                ))
            }
        }
    }

    #[test]
    fn formatter_failure_fails_render() {
        let dictionary = Dictionary::new(vec![
            Token::new(&["good"], "1"),
            Token::new(&["bad"], "1"),
            Token::new(&["also", "good"], "1"),
        ]);

        let result = render(&Failing, Dialect::Css, &dictionary, false);
        assert_eq!(
            result,
            Err(RenderError::UnknownReference {
                token: "bad".to_string(),
                reference: "elsewhere".to_string(),
            })
        );
    }

    struct Only(Dialect);

    impl Declare for Only {
        fn declare(&self, token: &Token, context: &Context<'_>) -> Result<Option<String>, RenderError> {
            if context.dialect == self.0 {
                Variables.declare(token, context)
            } else {
                Ok(None)
            }
        }
    }

    #[test]
    fn formatter_may_decline() {
        let dictionary = palette();
        assert_eq!(render(&Only(Dialect::Less), Dialect::Css, &dictionary, true), Ok(String::new()));

        let result = render(&Only(Dialect::Less), Dialect::Less, &dictionary, true).unwrap();
        assert_eq!(
            lines(&result).len(),
            dictionary.len()
        );
    }

    #[test]
    fn cycles_detected() {
        let dictionary = Dictionary::new(vec![
            Token::new(&["size", "base"], "4px"),
            Token::new(&["color", "a"], "#000").with_original("{color.c}"),
            Token::new(&["color", "b"], "#000").with_original("{color.a}"),
            Token::new(&["color", "c"], "#000").with_original("{color.b}"),
        ]);

        let result = render_variables(Dialect::Css, &dictionary, true);
        assert_eq!(
            result,
            Err(RenderError::Cycle(CycleError {
                tokens: vec![
                    "color-a".to_string(),
                    "color-b".to_string(),
                    "color-c".to_string(),
                ]
            }))
        );

        // without references there is nothing to order, so nothing to fail
        let result = render_variables(Dialect::Css, &dictionary, false).unwrap();
        assert_eq!(
            lines(&result).len(),
            4
        );
    }

    #[test]
    fn unknown_reference_ignored_by_ordering_but_not_formatting() {
        let dictionary = Dictionary::new(vec![
            Token::new(&["a"], "1"),
            Token::new(&["b"], "2").with_original("{nowhere}"),
        ]);

        let result = render_variables(Dialect::Sass, &dictionary, false).unwrap();
        assert_eq!(result, "$a: 1;\n$b: 2;");

        let result = render_variables(Dialect::Sass, &dictionary, true);
        assert_eq!(
            result,
            Err(RenderError::UnknownReference {
                token: "b".to_string(),
                reference: "nowhere".to_string(),
            })
        );
    }
}
