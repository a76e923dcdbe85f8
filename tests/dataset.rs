extern crate tempfile;
extern crate transdep;

mod test_utils;

#[cfg(feature = "dataset-conll")]
mod tests {
    use std::io::{self, Cursor, Write};

    use tempfile::NamedTempFile;
    use transdep::dataset::conll;
    use transdep::io::Read;
    use transdep::lang::prelude::*;
    use transdep::lang::{Sentence, Token};
    use transdep::syntax::transition::{DependencySet, GoldState};

    use super::test_utils::mock;

    fn read_all(text: &str) -> io::Result<Vec<Sentence<Token<'static>>>> {
        let mut reader: conll::Reader<_> = conll::Reader::new(Cursor::new(text.as_bytes()));
        let mut sentences = vec![];
        reader.read(&mut sentences)?;
        Ok(sentences)
    }

    #[test]
    fn test_load() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(mock::CONLL_TEXT.as_bytes()).unwrap();
        file.flush().unwrap();

        let sentences = conll::load(file.path()).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].raw(), "John saw Mary .");
        assert_eq!(sentences[0].len(), 4);
        assert_eq!(sentences[1].len(), 2);

        let saw = &sentences[0][1];
        assert_eq!(saw.id(), 2);
        assert_eq!(saw.form(), "saw");
        assert_eq!(saw.lemma(), Some("see"));
        assert_eq!(saw.cpostag(), Some("VERB"));
        assert_eq!(saw.postag(), Some("VBD"));
        assert_eq!(saw.head(), Some(0));
        assert_eq!(saw.deprel(), Some("root"));
        assert_eq!(saw.features().and_then(|f| f.get("Tense")), Some("Past"));
        assert_eq!(sentences[0][0].features(), None);

        let gold = DependencySet::from_tokens(&sentences[0]).unwrap();
        assert_eq!(gold.len(), 4);
        assert_eq!(
            GoldState::new(&sentences[0]).unwrap().dependencies(),
            &gold
        );
    }

    #[test]
    fn test_read_upto() {
        let text = format!("{}\n{}", mock::CONLL_TEXT, mock::CONLL_TEXT);
        let mut reader: conll::Reader<_> = conll::Reader::new(Cursor::new(text.as_bytes()));
        let mut buf = vec![];
        assert_eq!(reader.read_upto(3, &mut buf).unwrap(), 3);
        assert_eq!(reader.read_upto(3, &mut buf).unwrap(), 1);
        assert_eq!(reader.read_upto(3, &mut buf).unwrap(), 0);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf[3].raw(), "Dogs bark");
    }

    #[test]
    fn test_invalid_input() {
        let error = read_all("1\tJohn\tjohn\n").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);

        let error = read_all("1\tJohn\t_\t_\t_\t_\tx\t_\t_\t_\n").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);

        let error = read_all("2\tJohn\t_\t_\t_\t_\t0\troot\t_\t_\n").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);

        assert!(read_all("").unwrap().is_empty());
        assert!(read_all("\n\n# comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_write_sentence() {
        let sentences = read_all(mock::CONLL_TEXT).unwrap();
        let sentence = &sentences[1];
        let gold = DependencySet::from_tokens(sentence).unwrap();

        let mut buf = vec![];
        conll::write_sentence(&mut buf, sentence, &gold).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "1\tDogs\tdog\tNOUN\tNNS\tNumber=Plur\t2\tnsubj\t_\t_\n\
             2\tbark\tbark\tVERB\tVBP\t_\t0\troot\t_\t_\n\n"
        );

        let mut buf = vec![];
        conll::write_sentence(&mut buf, sentence, &DependencySet::new()).unwrap();
        let written = read_all(&String::from_utf8(buf).unwrap()).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0][0].head(), None);
        assert_eq!(written[0][0].form(), "Dogs");
        assert_eq!(written[0][0].cpostag(), Some("NOUN"));
        assert_eq!(written[0][0].postag(), Some("NNS"));
        assert!(DependencySet::from_tokens(&written[0]).is_err());
    }

    #[test]
    fn test_coarse_tags() {
        let sentences = read_all("1\tDogs\tdog\t_\tNNS\t_\t0\troot\t_\t_\n").unwrap();
        let dogs = &sentences[0][0];
        assert_eq!(dogs.cpostag(), None);
        assert_eq!(dogs.postag(), Some("NNS"));

        let gold = DependencySet::from_tokens(&sentences[0]).unwrap();
        let mut buf = vec![];
        conll::write_sentence(&mut buf, &sentences[0], &gold).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "1\tDogs\tdog\t_\tNNS\t_\t0\troot\t_\t_\n\n"
        );
    }
}
