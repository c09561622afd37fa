// Please keep the code below in sync with `README.md`.

mod checking_1 {
    use delimit::{CheckOptions, Diagnostic};

    #[test]
    fn check_brackets() {
        let report = CheckOptions::symbols().check("(()");
        assert!(!report.balanced());

        match report.diagnostics() {
            [Diagnostic::UnclosedAtEof { pending, total }] => {
                assert_eq!(*total, 1);
                assert_eq!(pending[0].position.offset, 0);
            },
            other => panic!("unexpected findings: {other:?}"),
        }
    }
}

mod checking_2 {
    use delimit::{CheckOptions, Diagnostic, Mode, VoidTags};

    #[test]
    fn check_tags() {
        let options = CheckOptions::new(Mode::Tags(VoidTags::default()));
        let report = options.check("<div><span></div></span></p><b>");

        assert!(matches!(
            report.diagnostics(),
            [
                Diagnostic::Mismatch { .. },
                Diagnostic::Mismatch { .. },
                Diagnostic::UnexpectedClose { .. },
            ]
        ));
        assert!(report.halted());
    }
}

mod checking_3 {
    use delimit::{CheckOptions, Error, Mode, SymbolPairs};

    #[test]
    fn custom_delimiters() -> Result<(), Error> {
        let pairs = SymbolPairs::parse("()<>")?;
        let report = CheckOptions::new(Mode::Symbols(pairs)).check("Vec<Option<u8>>");
        assert!(report.balanced());
        Ok(())
    }
}

mod editing_1 {
    use delimit::{editing::RangeTransform, Document, Error};

    #[test]
    fn move_lines() -> Result<(), Error> {
        let mut page = Document::from_text("page.tsx", "<main>\n<aside/>\n<p>x</p>\n</main>");
        page.apply(
            &RangeTransform::Move {
                start: 2,
                end: 2,
                after: 3,
            },
            None,
        )?;
        assert_eq!(page.text(), "<main>\n<p>x</p>\n<aside/>\n</main>");
        Ok(())
    }
}
