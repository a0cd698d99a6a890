/// Expression parsing.
///
/// Infix set operators are parsed by precedence climbing over the `sml_core` operator table, then
/// `factor`, objects and their params by plain recursive descent.
impl<I: Iterator<Item = Token>> Parser<I> {
    fn expression(&mut self) -> Result<Node, CompileError> {
        self.binary(1)
    }

    /// Operands joined by operators binding at least as tight as `min_precedence`.
    fn binary(&mut self, min_precedence: u8) -> Result<Node, CompileError> {
        let mut left = self.factor()?;
        // Each fold puts `left` one level further down the tree.
        let mut folds = 0;
        loop {
            let Some(id) = self.peek()?.operator_id() else {
                break;
            };
            let info = operators::info_for(id);
            if info.precedence < min_precedence || info.associativity != Associativity::Left {
                break;
            }
            let make: fn(BinaryNode) -> Node = match id {
                OperatorId::Diff => Node::Diff,
                OperatorId::Intersection => Node::Intersection,
                OperatorId::Union => Node::Union,
                OperatorId::Location => break,
            };
            let op = self.advance()?;
            self.descend(op.pos)?;
            folds += 1;
            // Left associative: the right operand only takes tighter operators.
            let right = self.binary(info.precedence + 1)?;
            left = make(BinaryNode::new(op.pos, left, right));
        }
        self.depth -= folds;
        Ok(left)
    }

    fn factor(&mut self) -> Result<Node, CompileError> {
        match self.peek_kind()? {
            kind if kind.is_numeric() => self.number(),
            kind if kind.is_name() => self.object(),
            TokenKind::LeftParen => self.group(),
            _ => {
                let token = self.advance()?;
                Err(Self::unexpected(&token, "operand"))
            }
        }
    }

    /// `IDENT param* ( "@" param* )?`
    fn object(&mut self) -> Result<Node, CompileError> {
        let ident = self.advance()?;
        let params = self.params()?;
        let location_params = if self.peek_kind()?.is_operator(OperatorId::Location) {
            self.advance()?;
            self.params()?
        } else {
            Vec::new()
        };
        Ok(Node::Object(ObjectNode::new(ident.pos, ident.text, params, location_params)))
    }

    /// Zero or more params; stops at the first token that cannot start one.
    fn params(&mut self) -> Result<Vec<Node>, CompileError> {
        let mut params = Vec::new();
        loop {
            let param = match self.peek_kind()? {
                kind if kind.is_numeric() => self.number()?,
                kind if kind.is_name() => {
                    // A bare name is an object with no params of its own.
                    let name = self.advance()?;
                    Node::Object(ObjectNode::new(name.pos, name.text, Vec::new(), Vec::new()))
                }
                TokenKind::LeftParen => self.group()?,
                _ => break,
            };
            params.push(param);
        }
        Ok(params)
    }

    fn number(&mut self) -> Result<Node, CompileError> {
        let token = self.advance()?;
        let is_complex = token.kind == TokenKind::Complex;
        Ok(Node::Number(NumberNode::new(token.pos, token.text, is_complex)?))
    }

    /// `"(" expression ")"`; the parentheses leave no node of their own.
    fn group(&mut self) -> Result<Node, CompileError> {
        let open = self.advance()?;
        self.descend(open.pos)?;
        let inner = self.expression()?;
        self.depth -= 1;
        let close = self.advance()?;
        match close.kind {
            TokenKind::RightParen => Ok(inner),
            TokenKind::Eof => Err(CompileError::syntax(
                "unclosed left paren: expected right paren, found EOF",
                open.pos,
            )
            .with_hint("add `)` to close the group opened here")),
            _ => Err(Self::unexpected(&close, "group; expected right paren")),
        }
    }
}
